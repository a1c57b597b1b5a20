//! HTTP/1.1 protocol layer.
//!
//! - **`connection`**: the per-connection framer: buffers bytes and yields one
//!   request per header block, keeping pipelined leftovers for the next call
//! - **`parser`**: turns a raw header block into a [`request::Request`]
//! - **`request`**: request representation and header/query helpers
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content type detection based on file extensions
//!
//! # Framing
//!
//! ```text
//!   read() chunks:  | GET /a ..\r\n\r\nGET /b | ..\r\n\r\nGET /c .. |
//!                   └──── request 1 ───┘└── request 2 ──┘└ partial ┘
//!
//!   next_request() #1 → /a   (reads once, keeps "GET /b" buffered)
//!   next_request() #2 → /b   (reads once more)
//!   next_request() #3 → waits for the rest of /c, or Ok(None) on close
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
