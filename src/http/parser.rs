use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

/// End-of-header marker separating one request's headers from the next.
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty header block")]
    Empty,
    #[error("header block is not valid UTF-8")]
    InvalidEncoding,
    #[error("request line has fewer than two tokens")]
    InvalidRequestLine,
}

/// Parses one header block (everything before the CRLFCRLF terminator).
///
/// Header lines without a colon are skipped. Header names are trimmed and
/// lowercased; a repeated name keeps its last value.
pub fn parse_request(block: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(block).map_err(|_| ParseError::InvalidEncoding)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = text.split(['\r', '\n']).filter(|line| !line.is_empty());

    // Request line
    let request_line = lines.next().ok_or(ParseError::Empty)?;
    let mut parts = request_line.split(' ').filter(|part| !part.is_empty());

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        headers.insert(
            key.trim().to_ascii_lowercase(),
            value.trim().to_string(),
        );
    }

    Ok(Request {
        method: Method::parse(method),
        target: target.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Byte offset of the first header terminator in `buf`, if any.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}
