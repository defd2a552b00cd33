use std::io::Write;

use hearth::http::response::Response;
use hearth::http::writer::ResponseWriter;
use tempfile::NamedTempFile;
use tokio::fs::File;

#[tokio::test]
async fn test_write_page_emits_head_then_body() {
    let mut sink: Vec<u8> = Vec::new();
    let resp = Response::not_found();

    ResponseWriter::new(&mut sink)
        .write_page(&resp)
        .await
        .unwrap();

    let text = String::from_utf8(sink).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_head_has_fixed_header_order() {
    let mut sink: Vec<u8> = Vec::new();
    let resp = Response::not_implemented();

    ResponseWriter::new(&mut sink)
        .write_page(&resp)
        .await
        .unwrap();

    let text = String::from_utf8(sink).unwrap();
    let head = text.split_once("\r\n\r\n").unwrap().0;
    let lines: Vec<&str> = head.split("\r\n").collect();

    assert_eq!(lines[0], "HTTP/1.1 501 Not Implemented");
    assert_eq!(lines[1], "Content-Type: text/html");
    assert!(lines[2].starts_with("Content-Length: "));
    assert_eq!(lines[3], "Connection: close");
    assert_eq!(lines.len(), 4);
}

#[tokio::test]
async fn test_content_length_matches_body_bytes() {
    let mut sink: Vec<u8> = Vec::new();
    let resp = Response::not_found();
    let body_len = resp.body.len();

    ResponseWriter::new(&mut sink)
        .write_page(&resp)
        .await
        .unwrap();

    let text = String::from_utf8(sink).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();

    assert!(head.contains(&format!("Content-Length: {}", body_len)));
    assert_eq!(body.len(), body_len);
}

#[tokio::test]
async fn test_write_file_streams_exact_bytes() {
    let content = b"0123456789";

    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content).unwrap();
    tmp.flush().unwrap();

    let mut file = File::open(tmp.path()).await.unwrap();
    let mut sink: Vec<u8> = Vec::new();

    ResponseWriter::new(&mut sink)
        .write_file("text/plain", content.len() as u64, &mut file)
        .await
        .unwrap();

    let head_end = sink
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .unwrap();
    let head = std::str::from_utf8(&sink[..head_end]).unwrap();
    let body = &sink[head_end + 4..];

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: text/plain"));
    assert!(head.contains("Content-Length: 10"));
    assert!(head.contains("Connection: close"));
    assert_eq!(body, content);
}

#[tokio::test]
async fn test_write_empty_file() {
    let tmp = NamedTempFile::new().unwrap();

    let mut file = File::open(tmp.path()).await.unwrap();
    let mut sink: Vec<u8> = Vec::new();

    ResponseWriter::new(&mut sink)
        .write_file("application/octet-stream", 0, &mut file)
        .await
        .unwrap();

    let text = String::from_utf8(sink).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();

    assert!(head.contains("Content-Length: 0"));
    assert!(body.is_empty());
}
