//! Connection handling: accept loop, worker pool, per-connection loop and
//! request routing.
//!
//! ```text
//!  Listener ──accept──▶ WorkerPool queue ──▶ worker 0..N
//!                                              │
//!                                              ▼
//!                         handle_connection: Connection::next_request
//!                                              │
//!                                              ▼
//!                         router::route ──▶ static_files | index query
//! ```

pub mod handler;
pub mod listener;
pub mod pool;
pub mod render;
pub mod router;
pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::index::SharedIndex;
use handler::{AppContext, ConnectionTask, handle_connection};
use listener::Listener;
use pool::WorkerPool;

/// A bound listener plus the worker pool that serves its connections.
pub struct Server {
    listener: Listener,
    pool: WorkerPool<ConnectionTask<TcpStream>>,
}

impl Server {
    pub async fn bind(cfg: &Config, index: SharedIndex) -> anyhow::Result<Self> {
        let listener = Listener::bind_and_listen(&cfg.server.listen_addr).await?;

        let ctx = Arc::new(AppContext {
            index,
            static_files: cfg.static_files.clone(),
            max_header_bytes: cfg.server.max_header_bytes,
        });

        let pool = WorkerPool::spawn(
            cfg.server.workers,
            cfg.server.queue_capacity.into(),
            move |task: ConnectionTask<TcpStream>| handle_connection(task, Arc::clone(&ctx)),
        );
        tracing::info!(workers = pool.worker_count(), "Serving");

        Ok(Self { listener, pool })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.listener.local_addr()
    }

    /// Runs the accept loop until accepting fails, then drains the pool.
    pub async fn run(self) -> anyhow::Result<()> {
        let Server { listener, pool } = self;
        let result = listener.run(&pool).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Accept loop stopped");
        }
        pool.shutdown().await;
        result
    }
}
