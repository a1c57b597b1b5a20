//! searchd - concurrent HTTP search engine
//!
//! A fixed pool of workers serves pipelined HTTP/1.1 connections; queries are
//! answered from an in-memory inverted index.

pub mod config;
pub mod error;
pub mod http;
pub mod index;
pub mod server;
