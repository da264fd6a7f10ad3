//! Response body rendering.
//!
//! Bodies are streamed, never buffered whole: HTML goes out line-by-line
//! with template tags substituted, images go out in fixed-size chunks
//! verbatim.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::mime::ContentType;

/// Chunk size for binary bodies.
const BUFFER_SIZE: usize = 8192;

/// Literal tag replaced with the current HTTP-formatted date.
pub const DATE_TAG: &str = "<cs371date>";

/// Literal tag replaced with the configured server name.
pub const SERVER_TAG: &str = "<cs371server>";

/// Maps a request path onto the web root.
///
/// The leading `/` the request carries is stripped before joining, so
/// `/hello.html` under root `www` becomes `www/hello.html`.
pub fn resolve(root: &Path, request_path: &str) -> PathBuf {
    root.join(request_path.trim_start_matches('/'))
}

/// Substitutes both template tags in one line.
///
/// Every occurrence of each tag is replaced; the two substitutions are
/// independent, so a line may carry zero, one, or both tags.
pub fn substitute_tags(line: &str, date: &str, server_name: &str) -> String {
    line.replace(DATE_TAG, date).replace(SERVER_TAG, server_name)
}

/// Streams a file as the response body.
///
/// Dispatches on the classified content type: HTML is rendered
/// line-by-line with tag substitution, anything else is copied verbatim.
/// The file was already checked to exist; if the open still fails the
/// error propagates as a transmission failure, not a 404.
pub async fn render<W>(
    out: &mut W,
    path: &Path,
    content_type: ContentType,
    server_name: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let file = File::open(path)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;

    if content_type.is_text() {
        stream_text(out, file, server_name).await
    } else {
        stream_binary(out, file).await
    }
}

/// Writes the minimal 404 body. No file I/O is attempted.
pub async fn render_not_found<W>(out: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(b"<html><head></head><body>\n").await?;
    out.write_all(b"<h3>404 Not Found</h3>\n").await?;
    out.write_all(b"</body></html>\n").await?;
    Ok(())
}

async fn stream_text<W>(out: &mut W, file: File, server_name: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    // Formatted once; every tag in the file sees the same timestamp.
    let date = httpdate::fmt_http_date(SystemTime::now());

    let mut reader = BufReader::new(file);
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            break;
        }

        let rendered = substitute_tags(line.trim_end_matches(['\r', '\n']), &date, server_name);
        out.write_all(rendered.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }

    Ok(())
}

async fn stream_binary<W>(out: &mut W, mut file: File) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; BUFFER_SIZE];

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn resolve_strips_leading_slash() {
        let path = resolve(Path::new("www"), "/hello.html");
        assert_eq!(path, Path::new("www").join("hello.html"));
    }

    #[test]
    fn substitute_both_tags() {
        let line = "<p><cs371date> on <cs371server></p>";
        let rendered = substitute_tags(line, "DATE", "NAME");
        assert_eq!(rendered, "<p>DATE on NAME</p>");
    }
}
