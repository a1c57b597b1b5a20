use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotFound,
    InternalServerError,
}

impl StatusCode {
    /// ```
    /// # use searchd::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

/// Status, headers and body of one reply. Header names keep the case they
/// were set with; lookups through [`Response::header`] ignore it.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// ```
/// # use searchd::http::response::{ResponseBuilder, StatusCode};
/// let resp = ResponseBuilder::new(StatusCode::Ok).body("hello").build();
/// assert_eq!(resp.header("content-length"), Some("5"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Finishes the response, filling in `Content-Length` unless it was set.
    pub fn build(self) -> Response {
        let ResponseBuilder {
            status,
            mut headers,
            body,
        } = self;
        headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| body.len().to_string());

        Response {
            status,
            headers,
            body,
        }
    }
}

impl Response {
    /// A 200 OK HTML page.
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(body)
            .build()
    }

    /// A 200 OK response with an explicit content type.
    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }

    /// A 404 Not Found HTML page.
    pub fn not_found(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/html")
            .body(body)
            .build()
    }

    pub fn internal_error() -> Self {
        Self::ok("text/plain", "internal server error").with_status(StatusCode::InternalServerError)
    }

    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets the `Connection` header to `keep-alive` or `close`.
    pub fn with_connection(mut self, keep_alive: bool) -> Self {
        let value = if keep_alive { "keep-alive" } else { "close" };
        self.headers.insert("Connection".to_string(), value.to_string());
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
