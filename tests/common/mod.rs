#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadBuf};

/// In-memory transport that hands out a fixed script of read results, one
/// per `poll_read`, and records everything written to it.
///
/// An exhausted script reads as end-of-stream.
#[derive(Default)]
pub struct ScriptedStream {
    reads: VecDeque<io::Result<Vec<u8>>>,
    pub written: Vec<u8>,
    pub read_calls: usize,
    pub fail_writes: bool,
}

impl ScriptedStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let mut stream = Self::new();
        for chunk in chunks {
            stream = stream.chunk(chunk.as_ref());
        }
        stream
    }

    pub fn chunk(mut self, bytes: &[u8]) -> Self {
        self.reads.push_back(Ok(bytes.to_vec()));
        self
    }

    pub fn error(mut self, kind: io::ErrorKind) -> Self {
        self.reads.push_back(Err(io::Error::new(kind, "scripted failure")));
        self
    }
}

impl AsyncRead for ScriptedStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        self.read_calls += 1;
        match self.reads.pop_front() {
            Some(Ok(chunk)) => {
                let n = chunk.len().min(buf.remaining());
                buf.put_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.reads.push_front(Ok(chunk[n..].to_vec()));
                }
                Poll::Ready(Ok(()))
            }
            Some(Err(e)) => Poll::Ready(Err(e)),
            None => Poll::Ready(Ok(())),
        }
    }
}

impl AsyncWrite for ScriptedStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if self.fail_writes {
            return Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "scripted failure")));
        }
        self.written.extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// A response read off the wire.
#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Splits serialized responses off the front of `buf`, using Content-Length
/// to find each body. Returns `None` when `buf` holds no complete response.
pub fn split_response(buf: &mut Vec<u8>) -> Option<RawResponse> {
    let end = buf.windows(4).position(|w| w == b"\r\n\r\n")?;
    let head = String::from_utf8_lossy(&buf[..end]).into_owned();
    let mut lines = head.split("\r\n");
    let status_line = lines.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let len: usize = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);
    if buf.len() < end + 4 + len {
        return None;
    }
    let body = buf[end + 4..end + 4 + len].to_vec();
    buf.drain(..end + 4 + len);
    Some(RawResponse {
        status_line,
        headers,
        body,
    })
}

/// Reads from `stream` until one full response is available.
pub async fn read_response<S>(stream: &mut S, pending: &mut Vec<u8>) -> Option<RawResponse>
where
    S: AsyncRead + Unpin,
{
    loop {
        if let Some(resp) = split_response(pending) {
            return Some(resp);
        }
        let mut chunk = [0u8; 4096];
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        pending.extend_from_slice(&chunk[..n]);
    }
}

pub async fn send<S>(stream: &mut S, bytes: &[u8])
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(bytes).await.unwrap();
    stream.flush().await.unwrap();
}
