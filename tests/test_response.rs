use tagserve::http::mime::ContentType;
use tagserve::http::response::StatusCode;
use tagserve::http::writer::{serialize_head, write_header};

#[test]
fn test_status_code_values() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_reason_phrases() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_head_field_order_and_terminator() {
    let head = serialize_head(
        StatusCode::Ok,
        ContentType::Html,
        "Tue, 25 Aug 2026 12:00:00 GMT",
        "Tagserve",
    );
    let head = String::from_utf8(head).unwrap();

    assert_eq!(
        head,
        "HTTP/1.1 200 OK\r\n\
         Date: Tue, 25 Aug 2026 12:00:00 GMT\r\n\
         Server: Tagserve\r\n\
         Connection: close\r\n\
         Content-Type: text/html\r\n\
         \r\n"
    );
}

#[test]
fn test_not_found_status_line() {
    let head = serialize_head(
        StatusCode::NotFound,
        ContentType::Html,
        "Tue, 25 Aug 2026 12:00:00 GMT",
        "Tagserve",
    );
    let head = String::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_head_echoes_content_type() {
    let head = serialize_head(StatusCode::Ok, ContentType::Png, "date", "srv");
    let head = String::from_utf8(head).unwrap();

    assert!(head.contains("Content-Type: image/png\r\n"));
}

#[tokio::test]
async fn test_write_header_emits_valid_date() {
    let mut out = Vec::new();
    write_header(&mut out, StatusCode::Ok, ContentType::Html, "Tagserve")
        .await
        .unwrap();

    let head = String::from_utf8(out).unwrap();
    let date_line = head
        .lines()
        .find(|l| l.starts_with("Date: "))
        .expect("Date header present");

    // RFC 7231 format round-trips through httpdate
    let date = date_line.trim_start_matches("Date: ");
    assert!(httpdate::parse_http_date(date).is_ok());
}

#[tokio::test]
async fn test_write_header_ends_with_blank_line() {
    let mut out = Vec::new();
    write_header(&mut out, StatusCode::NotFound, ContentType::Html, "Tagserve")
        .await
        .unwrap();

    assert!(out.ends_with(b"\r\n\r\n"));
}
