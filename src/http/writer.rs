use std::time::SystemTime;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime::ContentType;
use crate::http::response::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the response head: status line, the four fixed header
/// fields in order (Date, Server, Connection, Content-Type), and the
/// blank line terminating the header block.
pub fn serialize_head(
    status: StatusCode,
    content_type: ContentType,
    date: &str,
    server_name: &str,
) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Date: ");
    buf.extend_from_slice(date.as_bytes());
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(b"Server: ");
    buf.extend_from_slice(server_name.as_bytes());
    buf.extend_from_slice(b"\r\n");

    // One request per connection; keep-alive is never offered.
    buf.extend_from_slice(b"Connection: close\r\n");

    buf.extend_from_slice(b"Content-Type: ");
    buf.extend_from_slice(content_type.as_str().as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes the response head with the current time in the `Date:` field.
///
/// Does not flush; the connection worker flushes once the body has been
/// written as well.
pub async fn write_header<W>(
    out: &mut W,
    status: StatusCode,
    content_type: ContentType,
    server_name: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let date = httpdate::fmt_http_date(SystemTime::now());
    let head = serialize_head(status, content_type, &date, server_name);
    out.write_all(&head).await?;
    Ok(())
}
