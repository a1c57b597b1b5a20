use searchd::http::parser::{ParseError, find_headers_end, parse_request};
use searchd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\nHost: example.com").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_parse_multiple_headers() {
    let block = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*";
    let parsed = parse_request(block).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
    assert_eq!(parsed.headers.len(), 3);
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let parsed = parse_request(b"GET /query?terms=rust HTTP/1.1\r\nHost: example.com").unwrap();

    assert_eq!(parsed.target, "/query?terms=rust");
    assert_eq!(parsed.path(), "/query");
}

#[test]
fn test_parse_header_names_are_lowercased_values_trimmed() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\n  Content-TYPE :   text/html  ").unwrap();

    assert_eq!(parsed.headers.get("content-type").map(String::as_str), Some("text/html"));
    assert!(!parsed.headers.contains_key("Content-TYPE"));
}

#[test]
fn test_parse_header_value_may_contain_colons() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\nHost: localhost:8080").unwrap();

    assert_eq!(parsed.header("host"), Some("localhost:8080"));
}

#[test]
fn test_parse_later_duplicate_header_wins() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\nX-Id: 1\r\nx-id: 2").unwrap();

    assert_eq!(parsed.header("X-Id"), Some("2"));
}

#[test]
fn test_parse_header_line_without_colon_is_skipped() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: h").unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("host"), Some("h"));
}

#[test]
fn test_parse_surrounding_whitespace_is_trimmed() {
    let parsed = parse_request(b"\r\n  GET /x HTTP/1.1\r\nHost: h\r\n  ").unwrap();

    assert_eq!(parsed.target, "/x");
}

#[test]
fn test_parse_repeated_spaces_in_request_line() {
    let parsed = parse_request(b"GET   /spaced   HTTP/1.1").unwrap();

    assert_eq!(parsed.target, "/spaced");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_two_token_request_line_defaults_version() {
    let parsed = parse_request(b"GET /old").unwrap();

    assert_eq!(parsed.target, "/old");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_unknown_method_is_accepted() {
    let parsed = parse_request(b"BREW /pot HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_empty_block_fails() {
    assert_eq!(parse_request(b""), Err(ParseError::Empty));
    assert_eq!(parse_request(b" \r\n \r\n"), Err(ParseError::Empty));
}

#[test]
fn test_parse_single_token_request_line_fails() {
    assert_eq!(
        parse_request(b"GET\r\nHost: example.com"),
        Err(ParseError::InvalidRequestLine)
    );
}

#[test]
fn test_parse_invalid_utf8_fails() {
    assert_eq!(
        parse_request(b"GET /\xff\xfe HTTP/1.1"),
        Err(ParseError::InvalidEncoding)
    );
}

#[test]
fn test_find_headers_end_requires_full_terminator() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r"), None);
    assert_eq!(find_headers_end(b"\r\n\r\n"), Some(0));
}
