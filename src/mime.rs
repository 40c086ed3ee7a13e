//! Static extension-to-MIME lookup.
//!
//! The table is fixed for the process lifetime; classification elsewhere in
//! the crate is driven entirely by the MIME strings returned here.

use std::path::Path;

/// Map a lowercase dotted file extension to its MIME type.
///
/// Unknown extensions map to `application/octet-stream`.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        // Video
        ".mp4" => "video/mp4",
        ".webm" => "video/webm",
        ".ogg" => "video/ogg",
        ".avi" => "video/x-msvideo",
        ".mov" => "video/quicktime",
        ".wmv" => "video/x-ms-wmv",
        ".mkv" => "video/x-matroska",
        // Audio
        ".mp3" => "audio/mpeg",
        ".wav" => "audio/wav",
        ".m4a" => "audio/m4a",
        ".aac" => "audio/aac",
        ".flac" => "audio/flac",
        // Image
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".svg" => "image/svg+xml",
        // Documents
        ".pdf" => "application/pdf",
        ".doc" => "application/msword",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".xls" => "application/vnd.ms-excel",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".ppt" => "application/vnd.ms-powerpoint",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        // Text
        ".txt" => "text/plain",
        ".csv" => "text/csv",
        ".html" => "text/html",
        ".css" => "text/css",
        ".js" => "text/javascript",
        _ => "application/octet-stream",
    }
}

/// Extract the lowercase dotted extension from a file name.
///
/// Returns an empty string for names without an extension, so dotless names
/// fall through the table to `application/octet-stream`.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}
