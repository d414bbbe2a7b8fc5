use crate::http::request::{Method, Request};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has no method or no path token.
    #[error("malformed request line")]
    Malformed,
    /// Anything other than GET; carries the method as sent.
    #[error("{0} request not supported")]
    UnsupportedMethod(String),
}

/// Extracts the method and path from the first line of a request.
///
/// Only the method and path of the request line are inspected. The version
/// token, headers and any body are ignored.
/// The method is checked before the path is required, so a bare `POST`
/// is rejected as unsupported rather than malformed.
pub fn parse_request(raw: &str) -> Result<Request, ParseError> {
    let request_line = raw.split('\n').next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::Malformed)?;
    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_str.to_string()))?;

    let path = parts.next().ok_or(ParseError::Malformed)?;

    Ok(Request {
        method,
        path: path.to_string(),
    })
}

pub(crate) fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
