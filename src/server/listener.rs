use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::http::connection::Connection;

/// Binds the configured address and serves until an accept error.
///
/// Bind failure is fatal: the error is returned to the caller and no
/// retry is attempted.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg.site.clone()).await
}

/// Accept loop over an already-bound listener.
///
/// Each accepted socket is moved into its own task; a worker's failure is
/// logged there and never reaches this loop. Returns only on an
/// unrecoverable accept error.
pub async fn serve(listener: TcpListener, site: SiteConfig) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
