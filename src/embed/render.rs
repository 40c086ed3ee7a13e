//! HTML rendering for embed pages.
//!
//! Pure string-building functions with no HTTP or filesystem dependencies,
//! so the template logic is unit-testable on its own. Identical inputs
//! always produce identical output.

use super::{EmbedKind, MEDIA_ROUTE};

/// Optional display parameters forwarded verbatim into fragment URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentParams<'a> {
    /// Start timestamp for video and audio.
    pub t: Option<&'a str>,
    /// Stop timestamp for video and audio.
    pub end: Option<&'a str>,
    /// Page number for PDF documents.
    pub page: Option<&'a str>,
}

/// Compose the media-fragment suffix for seekable URLs.
///
/// A bare start becomes `#t=30`, start and stop `#t=30,90`, and a stop on
/// its own plays from zero as `#t=0,90`.
fn time_fragment(t: Option<&str>, end: Option<&str>) -> String {
    match (t, end) {
        (Some(t), Some(end)) => format!("#t={t},{end}"),
        (Some(t), None) => format!("#t={t}"),
        (None, Some(end)) => format!("#t=0,{end}"),
        (None, None) => String::new(),
    }
}

/// Render the embed fragment for one media file.
///
/// `id` must already be sanitized; the fragment URLs point at
/// [`MEDIA_ROUTE`] where the static file service serves the same name.
pub fn render_fragment(kind: &EmbedKind, id: &str, params: &FragmentParams) -> String {
    let url = format!("{MEDIA_ROUTE}/{id}");

    match kind {
        EmbedKind::Video { mime } => {
            let seek = time_fragment(params.t, params.end);
            format!(
                "<video controls width=\"100%\" height=\"auto\">\n    \
                 <source src=\"{url}{seek}\" type=\"{mime}\">\n</video>"
            )
        }
        EmbedKind::Audio { mime } => {
            let seek = time_fragment(params.t, params.end);
            format!(
                "<audio controls>\n    \
                 <source src=\"{url}{seek}\" type=\"{mime}\">\n</audio>"
            )
        }
        EmbedKind::Image => {
            format!(
                "<img src=\"{url}\" alt=\"Embedded image\" style=\"max-width: 100%; height: auto;\">"
            )
        }
        EmbedKind::Pdf => {
            let page = params
                .page
                .map(|p| format!("#page={p}"))
                .unwrap_or_default();
            format!("<iframe src=\"{url}{page}\" width=\"100%\" height=\"600px\"></iframe>")
        }
        EmbedKind::Frame => {
            format!("<iframe src=\"{url}\" width=\"100%\" height=\"600px\"></iframe>")
        }
        EmbedKind::Download => {
            format!("<a href=\"{url}\" target=\"_blank\">Download {id}</a>")
        }
        EmbedKind::Unsupported { ext } => {
            format!("<p>Unsupported file type: {ext}</p>")
        }
    }
}

/// Wrap a fragment into a complete, self-contained HTML document.
pub fn render_document(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Media Embed</title>
    <style>
        body, html {{
            margin: 0;
            padding: 0;
            width: 100%;
            height: 100%;
        }}
        #media-container {{
            width: 100%;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }}
    </style>
</head>
<body>
    <div id="media-container">
        {fragment}
    </div>
</body>
</html>
"#
    )
}
