//! Embed classification and rendering.
//!
//! Maps a sanitized media identifier to an [`EmbedKind`] and renders the
//! HTML page that points the browser back at the static media routes.

mod render;

pub use render::{render_document, render_fragment, FragmentParams};

use serde::Deserialize;

use crate::mime;

/// URL prefix under which the media directory is mounted.
pub const MEDIA_ROUTE: &str = "/media";

/// Query parameters accepted by the embed endpoint.
///
/// `t`, `end` and `page` are display hints passed through verbatim into the
/// rendered fragment URLs; they are never interpreted server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedQuery {
    /// Media identifier, reduced to a bare file name before use.
    pub id: Option<String>,

    /// Start timestamp for video and audio.
    pub t: Option<String>,

    /// Stop timestamp for video and audio.
    pub end: Option<String>,

    /// Page number for PDF documents.
    pub page: Option<String>,
}

/// Embed fragment category, selected from a file's MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedKind {
    /// `<video controls>` with a single `<source>`.
    Video { mime: &'static str },
    /// `<audio controls>` with a single `<source>`.
    Audio { mime: &'static str },
    /// Plain `<img>` tag.
    Image,
    /// PDF shown in an `<iframe>`, seekable to a page.
    Pdf,
    /// Text content (HTML or not) shown in an `<iframe>`.
    Frame,
    /// Non-PDF application types offered as a download link.
    Download,
    /// Extension maps to no renderable category; still a 200 page.
    Unsupported { ext: String },
}

/// Reduce a caller-supplied media identifier to its base file name.
///
/// Any directory components (either separator style) are discarded so the
/// identifier can never address a path outside the media directory. Returns
/// `None` when nothing usable remains, e.g. `""`, `"/"` or `".."`.
pub fn sanitize_media_id(id: &str) -> Option<String> {
    let base = id
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return None;
    }

    Some(base.to_string())
}

/// Classify a sanitized identifier by the slash-delimited prefix of its MIME
/// type. PDF is special-cased within `application/*`; every other
/// `application/*` type falls back to a download link.
pub fn classify(id: &str) -> EmbedKind {
    let ext = mime::extension_of(id);
    let mime_type = mime::mime_for_extension(&ext);

    match mime_type.split('/').next().unwrap_or("") {
        "video" => EmbedKind::Video { mime: mime_type },
        "audio" => EmbedKind::Audio { mime: mime_type },
        "image" => EmbedKind::Image,
        "application" if mime_type == "application/pdf" => EmbedKind::Pdf,
        "application" if mime_type != "application/octet-stream" => EmbedKind::Download,
        "text" => EmbedKind::Frame,
        _ => EmbedKind::Unsupported { ext },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_bare_names() {
        assert_eq!(sanitize_media_id("clip.mp4").as_deref(), Some("clip.mp4"));
        assert_eq!(
            sanitize_media_id("with spaces.png").as_deref(),
            Some("with spaces.png")
        );
    }

    #[test]
    fn sanitize_strips_traversal_segments() {
        assert_eq!(
            sanitize_media_id("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_media_id("/var/log/syslog").as_deref(),
            Some("syslog")
        );
        assert_eq!(
            sanitize_media_id("..\\..\\windows\\system.ini").as_deref(),
            Some("system.ini")
        );
    }

    #[test]
    fn sanitize_rejects_empty_results() {
        assert_eq!(sanitize_media_id(""), None);
        assert_eq!(sanitize_media_id("/"), None);
        assert_eq!(sanitize_media_id("///"), None);
        assert_eq!(sanitize_media_id(".."), None);
        assert_eq!(sanitize_media_id("a/b/.."), None);
    }

    #[test]
    fn classify_by_mime_category() {
        assert_eq!(
            classify("clip.mp4"),
            EmbedKind::Video { mime: "video/mp4" }
        );
        assert_eq!(
            classify("song.flac"),
            EmbedKind::Audio { mime: "audio/flac" }
        );
        assert_eq!(classify("photo.jpeg"), EmbedKind::Image);
        assert_eq!(classify("doc.pdf"), EmbedKind::Pdf);
        assert_eq!(classify("notes.txt"), EmbedKind::Frame);
        assert_eq!(classify("page.html"), EmbedKind::Frame);
    }

    #[test]
    fn classify_non_pdf_application_as_download() {
        assert_eq!(classify("report.docx"), EmbedKind::Download);
        assert_eq!(classify("sheet.xlsx"), EmbedKind::Download);
    }

    #[test]
    fn classify_unknown_extension_as_unsupported() {
        assert_eq!(
            classify("archive.zip"),
            EmbedKind::Unsupported {
                ext: ".zip".to_string()
            }
        );
        assert_eq!(
            classify("README"),
            EmbedKind::Unsupported {
                ext: String::new()
            }
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            classify("CLIP.MP4"),
            EmbedKind::Video { mime: "video/mp4" }
        );
    }
}
