use bytes::{Buf, BytesMut};
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::error::FrameError;
use crate::http::parser::{HEADER_TERMINATOR, find_headers_end, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Default cap on a single header block still waiting for its terminator.
pub const DEFAULT_MAX_HEADER_BYTES: usize = 64 * 1024;

const READ_CHUNK: usize = 4096;

/// What the buffer holds between two `next_request` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// A complete header block is buffered; the next call will not read.
    RequestPending,
    /// Only a partial block (or nothing) is buffered.
    NeedMoreBytes,
}

/// One client connection: the byte stream plus the bytes read from it but not
/// yet handed out as requests.
///
/// The buffer always holds zero or more complete header blocks followed by at
/// most one partial block, so pipelined requests that arrive in a single read
/// are returned one per call.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    max_header_bytes: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self::with_max_header_bytes(stream, DEFAULT_MAX_HEADER_BYTES)
    }

    pub fn with_max_header_bytes(stream: S, max_header_bytes: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            max_header_bytes,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        if find_headers_end(&self.buffer).is_some() {
            FrameState::RequestPending
        } else {
            FrameState::NeedMoreBytes
        }
    }

    /// Bytes received but not yet consumed by a returned request.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the next request on this connection.
    ///
    /// `Ok(None)` means the peer closed the stream; any bytes of an unfinished
    /// request are discarded. An error means the connection is unusable. In
    /// both cases no further request will be produced.
    pub async fn next_request(&mut self) -> Result<Option<Request>, FrameError> {
        let end = loop {
            if let Some(end) = find_headers_end(&self.buffer) {
                break end;
            }

            if self.buffer.len() > self.max_header_bytes {
                return Err(FrameError::HeaderTooLarge {
                    limit: self.max_header_bytes,
                });
            }

            self.buffer.reserve(READ_CHUNK);
            match self.stream.read_buf(&mut self.buffer).await {
                Ok(0) => {
                    if !self.buffer.is_empty() {
                        tracing::debug!(
                            pending = self.buffer.len(),
                            "Peer closed with an incomplete request"
                        );
                    }
                    return Ok(None);
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };

        let block = self.buffer.split_to(end);
        self.buffer.advance(HEADER_TERMINATOR.len());

        Ok(Some(parse_request(&block)?))
    }

    pub async fn write_response(&mut self, response: &Response) -> Result<(), FrameError> {
        ResponseWriter::new(response)
            .write_to_stream(&mut self.stream)
            .await
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}
