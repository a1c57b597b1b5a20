//! Typed errors for the protocol, pool and configuration seams.
//!
//! Application-level code (the binary, listener, corpus loading) propagates
//! these through `anyhow`.

use crate::http::parser::ParseError;
use thiserror::Error;

/// Why a connection stopped yielding requests or accepting responses.
///
/// Every variant ends the connection; none is retried.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed request: {0}")]
    Malformed(#[from] ParseError),

    #[error("header block exceeds {limit} bytes")]
    HeaderTooLarge { limit: usize },

    #[error("connection closed while writing")]
    WriteZero,

    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("worker pool is shut down")]
    Closed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
