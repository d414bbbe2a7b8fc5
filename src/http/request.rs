/// HTTP request methods the server serves.
///
/// Only GET is answered. Any other method is rejected by the parser with
/// 405 Method Not Allowed before a `Request` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

/// A validated request line.
///
/// `path` is taken verbatim from the request line: it is neither
/// percent-decoded nor normalised, so `/a/../b` stays as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path (e.g., "/index.html")
    pub path: String,
}

impl Method {
    /// Parses a served method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` for an exact, case-sensitive match, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use rootserve::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }
}
