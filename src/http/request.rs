use std::collections::HashMap;
use url::Url;

/// HTTP request methods.
///
/// The server answers every method the same way; the method is kept for
/// logging and for callers that want to distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token found in the method position
    Other(String),
}

/// A parsed request header block.
///
/// Header names are stored lowercased, so lookups through [`Request::header`]
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target: path plus optional query string (e.g. "/query?terms=cat")
    pub target: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, keyed by lowercased name
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl Method {
    /// Maps a method token to a `Method`.
    ///
    /// Matching is case-sensitive; unknown tokens become [`Method::Other`].
    ///
    /// # Example
    ///
    /// ```
    /// # use searchd::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header; the name is lowercased the same way the parser does it.
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.as_ref().trim().to_ascii_lowercase(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.unwrap_or(Method::GET),
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// True when the client asked for the connection to be torn down after
    /// this exchange (`Connection: close`, any case).
    pub fn wants_close(&self) -> bool {
        self.header("Connection")
            .map(|v| v.eq_ignore_ascii_case("close"))
            .unwrap_or(false)
    }

    /// The path component of the target, without the query string.
    pub fn path(&self) -> &str {
        match self.target.split_once('?') {
            Some((path, _)) => path,
            None => &self.target,
        }
    }

    /// First value of query parameter `name`, percent- and `+`-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = self.url()?;
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn url(&self) -> Option<Url> {
        let base = Url::parse("http://localhost/").ok()?;
        base.join(&self.target).ok()
    }
}
