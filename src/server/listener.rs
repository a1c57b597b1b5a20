use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::info;

use crate::server::handler::{ConnectionTask, PeerInfo};
use crate::server::pool::WorkerPool;

/// Listening socket that feeds accepted connections to a worker pool.
pub struct Listener {
    inner: TcpListener,
    local: SocketAddr,
}

impl Listener {
    pub async fn bind_and_listen(addr: &str) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let local = inner.local_addr()?;
        info!("Listening on {}", local);
        Ok(Self { inner, local })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local
    }

    pub async fn accept(&self) -> std::io::Result<(TcpStream, PeerInfo)> {
        let (stream, client) = self.inner.accept().await?;
        let server = stream.local_addr().unwrap_or(self.local);
        Ok((stream, PeerInfo { client, server }))
    }

    /// Accepts connections and submits each one to `pool`.
    ///
    /// Returns when an accept fails (the error is returned) or when the pool
    /// has been shut down.
    pub async fn run(&self, pool: &WorkerPool<ConnectionTask<TcpStream>>) -> anyhow::Result<()> {
        loop {
            let (stream, peer) = self.accept().await.context("accept failed")?;
            info!("Accepted connection from {}", peer.client);

            if pool.submit(ConnectionTask { stream, peer }).await.is_err() {
                tracing::warn!("Worker pool closed; no longer accepting");
                return Ok(());
            }
        }
    }
}
