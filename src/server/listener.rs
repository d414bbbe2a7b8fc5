use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use crate::config::Config;
use crate::files::Resolver;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    let resolver = Resolver::new(cfg.static_files.webroot.clone());
    info!(webroot = %resolver.root().display(), "Listening on {}", addr);
    serve(listener, resolver, cfg.connection_timeout()).await
}

/// Accepts and serves clients strictly one after another.
///
/// A connection is fully read, answered and closed before the next `accept`.
/// Nothing a single client does ends the loop; it only stops when the future
/// is dropped.
pub async fn serve(
    listener: TcpListener,
    resolver: Resolver,
    io_timeout: Duration,
) -> anyhow::Result<()> {
    loop {
        tracing::debug!("waiting for a connection");
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, resolver.clone(), io_timeout);
        if let Err(e) = conn.run().await {
            tracing::warn!("Connection error from {}: {}", peer, e);
        }
    }
}
