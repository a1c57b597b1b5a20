use searchd::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

fn request_with(target: &str, headers: &[(&str, &str)]) -> Request {
    headers
        .iter()
        .fold(RequestBuilder::new().target(target), |b, (k, v)| b.header(k, *v))
        .build()
        .unwrap()
}

#[test]
fn test_request_header_retrieval_is_case_insensitive() {
    let req = request_with("/", &[("Host", "example.com"), ("Content-Type", "text/html")]);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("host"), Some("example.com"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("text/html"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_connection_close() {
    let req = request_with("/", &[("Connection", "close")]);
    assert!(req.wants_close());
}

#[test]
fn test_request_connection_close_case_insensitive() {
    let req = request_with("/", &[("CONNECTION", "Close")]);
    assert!(req.wants_close());
}

#[test]
fn test_request_keep_alive_by_default() {
    assert!(!request_with("/", &[]).wants_close());
    assert!(!request_with("/", &[("Connection", "keep-alive")]).wants_close());
}

#[test]
fn test_request_path_strips_query() {
    assert_eq!(request_with("/query?terms=a", &[]).path(), "/query");
    assert_eq!(request_with("/static/a.html", &[]).path(), "/static/a.html");
}

#[test]
fn test_request_query_param_decodes_plus_and_percent() {
    let req = request_with("/query?terms=Cat+dog%20Fish&x=1", &[]);

    assert_eq!(req.query_param("terms").as_deref(), Some("Cat dog Fish"));
    assert_eq!(req.query_param("x").as_deref(), Some("1"));
    assert_eq!(req.query_param("missing"), None);
}

#[test]
fn test_request_query_param_without_query_string() {
    assert_eq!(request_with("/", &[]).query_param("terms"), None);
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new().target("/").build().unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.version, "HTTP/1.1");
    assert!(req.headers.is_empty());
}

#[test]
fn test_request_builder_requires_target() {
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_struct_literal_uses_lowercase_keys() {
    let mut headers = HashMap::new();
    headers.insert("host".to_string(), "h".to_string());
    let req = Request {
        method: Method::POST,
        target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    };

    assert_eq!(req.header("Host"), Some("h"));
}

#[test]
fn test_request_method_parse() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("POST"), Method::POST);
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    assert_eq!(Method::parse("PATCH").to_string(), "PATCH");
}
