use rootserve::http::response::Response;
use rootserve::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_serialize_ok_terminates_headers() {
    let bytes = serialize_response(&Response::ok(b"hello".to_vec(), Some("text/plain")));

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\nConnection: close\r\nContent-Length: 5\r\n\r\nhello".to_vec()
    );
}

#[test]
fn test_serialize_image_terminates_headers_once() {
    let bytes = serialize_response(&Response::ok(b"PNG".to_vec(), Some("image/png")));
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.starts_with("HTTP/1.1 200 OK\r\ncontent-type: image/png\r\nAccept-Ranges: bytes\r\n"));
    assert_eq!(text.matches("\r\n\r\n").count(), 1);
    assert!(text.ends_with("\r\n\r\nPNG"));
}

#[test]
fn test_serialize_not_found() {
    let bytes = serialize_response(&Response::not_found());

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "HTTP/1.1 404 Not Found\r\n\
         Server: Varnish\r\n\
         content-type: text/html\r\n\
         Accept-Ranges: bytes\r\n\
         Connection: close\r\n\
         Content-Length: 48\r\n\
         \r\n\
         <html><body><h1>404 Not found</h1></body></html>"
    );
}

#[test]
fn test_serialize_method_not_allowed_has_empty_body() {
    let bytes = serialize_response(&Response::method_not_allowed());

    assert!(bytes.starts_with(b"HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(bytes.ends_with(b"\r\n\r\n"));
}

#[tokio::test]
async fn test_writer_writes_whole_buffer() {
    let response = Response::ok(vec![7u8; 10_000], None);
    let mut writer = ResponseWriter::new(&response);
    let expected = serialize_response(&response);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, expected);
    assert!(out.ends_with(&[7u8; 10_000]));
}
