//! Content type detection from file extensions.

use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Content type for a file name, by extension (case-insensitive).
///
/// Unknown or missing extensions fall back to `text/plain`.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("jpeg") | Some("jpg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("xml") => "text/xml",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
