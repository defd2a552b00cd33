use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::files::StaticFiles;
use crate::http::connection::Connection;

/// Owns the listening socket and the shared file-serving state.
///
/// Binding and running are split so the caller holds an explicit handle
/// between the two: the socket closes exactly once, when the `Server` (or
/// the future consuming it) is dropped, and tests can read the bound
/// address before starting the loop.
pub struct Server {
    listener: TcpListener,
    files: StaticFiles,
}

impl Server {
    /// Binds `0.0.0.0:<port>` with address reuse enabled and the configured
    /// backlog, after making sure the server root exists.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Server> {
        let files = StaticFiles::new(cfg.static_files.root.clone());
        files.ensure_root().await?;

        let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server.port));

        let socket = TcpSocket::new_v4().context("failed to create listening socket")?;
        socket
            .set_reuseaddr(true)
            .context("failed to set SO_REUSEADDR")?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;

        let listener = socket
            .listen(cfg.server.backlog)
            .with_context(|| format!("failed to listen on {}", addr))?;

        info!(
            "Listening on {}, serving {}",
            listener.local_addr()?,
            cfg.static_files.root.display()
        );

        Ok(Server { listener, files })
    }

    /// The address the listener actually bound (resolves port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop; never returns under normal operation.
    ///
    /// Accept failures are logged and the loop keeps going; a failed accept
    /// must not take the server down. Each accepted connection runs in its
    /// own task and its errors stay inside that task.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::warn!("accept failed: {}", e);
                    continue;
                }
            };

            info!("Accepted connection from {}", peer);

            let files = self.files.clone();
            tokio::spawn(async move {
                let conn = Connection::new(socket, files);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
