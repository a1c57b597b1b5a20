use std::io::ErrorKind;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::FrameError;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response as status line, headers, blank line, body.
///
/// Headers are written in name order so the output is stable.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    let mut headers: Vec<_> = resp.headers.iter().collect();
    headers.sort();
    for (k, v) in headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the whole serialized response, retrying on `Interrupted`.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> Result<(), FrameError>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = match stream.write(&self.buffer[self.written..]).await {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if n == 0 {
                return Err(FrameError::WriteZero);
            }

            self.written += n;
        }

        loop {
            match stream.flush().await {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
