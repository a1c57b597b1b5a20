use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::config::StaticFilesConfig;
use crate::http::connection::Connection;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::index::SharedIndex;
use crate::server::router;

/// Addresses of both ends of an accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerInfo {
    pub client: SocketAddr,
    pub server: SocketAddr,
}

/// One accepted connection waiting for a worker.
///
/// Owns the stream; whichever worker consumes the task closes it by dropping
/// it when the connection loop ends.
pub struct ConnectionTask<S> {
    pub stream: S,
    pub peer: PeerInfo,
}

/// Everything a connection needs to answer requests.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub index: SharedIndex,
    pub static_files: StaticFilesConfig,
    pub max_header_bytes: usize,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(Response, bool), // bool = keep_alive?
    Closed,
}

/// Serves requests on one connection until the client closes it, sends
/// `Connection: close`, sends something unparseable, or I/O fails.
///
/// Requests are answered strictly in arrival order. A `Connection: close`
/// request still gets its response before the connection is closed.
pub async fn handle_connection<S>(task: ConnectionTask<S>, ctx: Arc<AppContext>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let ConnectionTask { stream, peer } = task;
    let client = peer.client;
    tracing::info!(%client, "Client connected");

    let mut conn = Connection::with_max_header_bytes(stream, ctx.max_header_bytes);
    let mut state = ConnectionState::Reading;
    let mut served = 0usize;

    loop {
        state = match state {
            ConnectionState::Reading => match conn.next_request().await {
                Ok(Some(req)) => ConnectionState::Processing(req),
                Ok(None) => ConnectionState::Closed,
                Err(e) => {
                    tracing::warn!(%client, error = %e, "Abandoning connection");
                    ConnectionState::Closed
                }
            },

            ConnectionState::Processing(req) => {
                let keep_alive = !req.wants_close();
                tracing::debug!(
                    %client,
                    method = %req.method,
                    target = %req.target,
                    keep_alive,
                    "Handling request"
                );

                let response = router::route(&req, &ctx).await.with_connection(keep_alive);
                ConnectionState::Writing(response, keep_alive)
            }

            ConnectionState::Writing(response, keep_alive) => {
                match conn.write_response(&response).await {
                    Ok(()) => {
                        served += 1;
                        if keep_alive {
                            ConnectionState::Reading
                        } else {
                            ConnectionState::Closed
                        }
                    }
                    Err(e) => {
                        tracing::warn!(%client, error = %e, "Failed to write response");
                        ConnectionState::Closed
                    }
                }
            }

            ConnectionState::Closed => break,
        };
    }

    let mut stream = conn.into_inner();
    if let Err(e) = stream.shutdown().await {
        tracing::trace!(%client, error = %e, "Shutdown after close failed");
    }
    tracing::info!(%client, requests = served, "Connection closed");
}
