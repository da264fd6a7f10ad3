use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::http::mime::ContentType;
use crate::http::parser::{self, ParseError};
use crate::http::render;
use crate::http::response::StatusCode;
use crate::http::writer;

/// Per-connection worker.
///
/// Owns its stream exclusively for the lifetime of one request/response
/// cycle; nothing is shared with sibling workers. The stream is closed on
/// every exit path: explicitly via shutdown on success, by drop when
/// `run` returns an error to the spawn wrapper.
pub struct Connection {
    stream: TcpStream,
    site: SiteConfig,
}

impl Connection {
    pub fn new(stream: TcpStream, site: SiteConfig) -> Self {
        Self { stream, site }
    }

    /// Runs the full request/response cycle: parse, resolve, classify,
    /// header, body, flush, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let request = {
            let mut reader = BufReader::new(&mut self.stream);
            parser::read_request(&mut reader).await
        };

        let (status, content_type, resource) = match request {
            Ok(req) => {
                info!("GET {}", req.path);

                let path = render::resolve(&self.site.root, &req.path);
                let content_type = ContentType::from_path(&req.path);

                // Checked once; a file vanishing between this check and
                // the later open surfaces as a render error, not a 404.
                let exists = tokio::fs::metadata(&path)
                    .await
                    .map(|m| m.is_file())
                    .unwrap_or(false);

                if exists {
                    (StatusCode::Ok, content_type, Some(path))
                } else {
                    (StatusCode::NotFound, content_type, None)
                }
            }

            Err(ParseError::UnsupportedMethod(method)) => {
                // Method and path were recovered, so answer with a
                // best-effort 404 instead of dropping the connection.
                warn!("Rejecting unsupported method {}", method);
                (StatusCode::NotFound, ContentType::Html, None)
            }

            // Malformed or prematurely closed request: no response.
            Err(e) => return Err(e.into()),
        };

        writer::write_header(&mut self.stream, status, content_type, &self.site.server_name)
            .await?;

        match resource {
            Some(path) => {
                render::render(&mut self.stream, &path, content_type, &self.site.server_name)
                    .await?
            }
            None => render::render_not_found(&mut self.stream).await?,
        }

        self.stream.flush().await?;
        self.stream.shutdown().await?;

        Ok(())
    }
}
