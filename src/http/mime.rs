//! MIME type detection based on file extensions.

const OCTET_STREAM: &str = "application/octet-stream";

/// Maps a file path to a MIME type by its suffix.
///
/// The suffix is whatever follows the last `.` in the path, matched
/// case-insensitively against a fixed table. No suffix, or one not in the
/// table, yields `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use hearth::http::mime::from_path;
/// assert_eq!(from_path("index.html"), "text/html");
/// assert_eq!(from_path("photo.JPG"), "image/jpeg");
/// assert_eq!(from_path("README"), "application/octet-stream");
/// ```
pub fn from_path(path: &str) -> &'static str {
    let ext = match path.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return OCTET_STREAM,
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "css" => "text/css",
        "js" => "application/javascript",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "xml" => "application/xml",
        _ => OCTET_STREAM,
    }
}
