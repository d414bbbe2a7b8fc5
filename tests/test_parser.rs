use rootserve::http::parser::{ParseError, parse_request};
use rootserve::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
}

#[test]
fn test_parse_path_is_verbatim() {
    let req = "GET /a/../b%20c//d?q=rust HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.path, "/a/../b%20c//d?q=rust");
}

#[test]
fn test_parse_bare_newlines() {
    let req = "GET /index.html HTTP/1.0\nHost: example.com\n\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_version_token_is_optional() {
    let parsed = parse_request("GET /index.html\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_rejects_other_methods() {
    for method in ["POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "BREW", "get"] {
        let req = format!("{} /index.html HTTP/1.1\r\n\r\n", method);
        let result = parse_request(&req);

        assert_eq!(result, Err(ParseError::UnsupportedMethod(method.to_string())));
    }
}

#[test]
fn test_parse_method_checked_before_path() {
    let result = parse_request("POST\r\n\r\n");

    assert_eq!(result, Err(ParseError::UnsupportedMethod("POST".to_string())));
}

#[test]
fn test_parse_empty_request_is_malformed() {
    assert_eq!(parse_request(""), Err(ParseError::Malformed));
    assert_eq!(parse_request("\r\n\r\n"), Err(ParseError::Malformed));
    assert_eq!(parse_request("   \r\n"), Err(ParseError::Malformed));
}

#[test]
fn test_parse_get_without_path_is_malformed() {
    assert_eq!(parse_request("GET\r\n\r\n"), Err(ParseError::Malformed));
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        ParseError::UnsupportedMethod("POST".to_string()).to_string(),
        "POST request not supported"
    );
    assert_eq!(ParseError::Malformed.to_string(), "malformed request line");
}
