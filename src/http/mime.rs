//! MIME type detection based on file extensions.

/// Sent when a file's extension maps to no known type.
pub const FALLBACK: &str = "application/octet-stream";

/// Guesses the content type of a request path from its extension.
///
/// Returns `None` for unknown or missing extensions; callers decide what to
/// put on the wire in that case.
///
/// ```
/// # use rootserve::http::mime;
/// assert_eq!(mime::guess("/img/a.png"), Some("image/png"));
/// assert_eq!(mime::guess("/LICENSE"), None);
/// ```
pub fn guess(path: &str) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}

/// Whether clients should be told byte ranges are accepted for this type.
pub fn advertises_ranges(mime: &str) -> bool {
    mime != "text/plain" && mime.contains("image")
}
