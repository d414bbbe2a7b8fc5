use crate::http::mime;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File or listing served
/// - `BadRequest` (400): Request line could not be parsed
/// - `NotFound` (404): Path outside the allowed file set
/// - `MethodNotAllowed` (405): Anything other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rootserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

const NOT_FOUND_BODY: &[u8] = b"<html><body><h1>404 Not found</h1></body></html>";
const BAD_REQUEST_BODY: &[u8] = b"<html><body><h1>400 Bad request</h1></body></html>";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep the order they were added in, which is the order they are
/// written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as ordered name/value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("content-type", "text/html")
///     .body(b"<h1>hi</h1>".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of an existing one.
    ///
    /// Names match case-insensitively; a replaced header keeps its position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Appends a Content-Length header matching the body unless one was set,
    /// so clients never have to guess where the body ends.
    pub fn build(self) -> Response {
        let has_length = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("Content-Length"));

        let len = self.body.len();
        let builder = if has_length {
            self
        } else {
            self.header("Content-Length", len.to_string())
        };

        Response {
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// 200 OK carrying a file or the root listing.
    ///
    /// An unknown type goes out as `application/octet-stream`. Image types
    /// also advertise `Accept-Ranges: bytes`.
    pub fn ok(body: impl Into<Vec<u8>>, mime_type: Option<&str>) -> Self {
        let content_type = mime_type.unwrap_or(mime::FALLBACK);

        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .header("content-type", content_type);
        if mime_type.is_some_and(mime::advertises_ranges) {
            builder = builder.header("Accept-Ranges", "bytes");
        }

        builder
            .header("Connection", "close")
            .body(body.into())
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Server", "Varnish")
            .header("content-type", "text/html")
            .header("Accept-Ranges", "bytes")
            .header("Connection", "close")
            .body(NOT_FOUND_BODY.to_vec())
            .build()
    }

    /// Creates a 405 Method Not Allowed response with no body.
    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .header("Allow", "GET")
            .header("Connection", "close")
            .build()
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .header("content-type", "text/html")
            .header("Connection", "close")
            .body(BAD_REQUEST_BODY.to_vec())
            .build()
    }

    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
