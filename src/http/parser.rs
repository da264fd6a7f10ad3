use std::fmt;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// Stream closed before a request line arrived.
    EmptyRequest,
    /// Request line did not have the `GET <path> HTTP/x.y` shape.
    InvalidRequestLine(String),
    /// Method token was recognized syntax but not GET.
    UnsupportedMethod(String),
    /// Transport error while reading.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "connection closed before request line"),
            ParseError::InvalidRequestLine(line) => write!(f, "invalid request line: {:?}", line),
            ParseError::UnsupportedMethod(m) => write!(f, "unsupported HTTP method: {}", m),
            ParseError::Io(e) => write!(f, "read error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Parses a request line of the form `GET /path HTTP/1.1`.
///
/// Tokens are split on single spaces. The method must be exactly `GET`
/// (case-sensitive), the path must start with `/`, and the version token
/// must start with `HTTP/`.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let invalid = || ParseError::InvalidRequestLine(line.to_string());

    let mut parts = line.split(' ');
    let method_str = parts.next().ok_or_else(invalid)?;
    let path = parts.next().ok_or_else(invalid)?;
    let version = parts.next().ok_or_else(invalid)?;

    if parts.next().is_some() || !version.starts_with("HTTP/") {
        return Err(invalid());
    }

    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_str.to_string()))?;

    if !path.starts_with('/') {
        return Err(invalid());
    }

    Ok(Request {
        method,
        path: path.to_string(),
    })
}

/// Reads one request from the stream.
///
/// Lines may be CRLF- or LF-terminated; `read_line` never hands back a
/// fragment, so a slow client sending a line in pieces just blocks here.
/// The first non-empty line is the request line; subsequent header lines
/// are read and discarded until the blank terminator. A stream that ends
/// after a complete request line but before the blank line is tolerated,
/// since the headers are thrown away anyway.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();

    let request = loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(ParseError::EmptyRequest);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if !trimmed.is_empty() {
            break parse_request_line(trimmed)?;
        }
    };

    // Drain header lines up to the blank terminator (or EOF).
    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 || line.trim_end_matches(['\r', '\n']).is_empty() {
            break;
        }
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line("GET /index.html HTTP/1.1").unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/index.html");
    }

    #[test]
    fn reject_post() {
        let err = parse_request_line("POST /index.html HTTP/1.1").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedMethod(m) if m == "POST"));
    }
}
