use std::collections::HashMap;

use bytehttp::http::response::{Response, ResponseBuilder, StatusCode};
use bytehttp::http::writer::{ResponseWriter, serialize_response};

/// Splits wire bytes back into status, headers and body.
fn reparse(wire: &[u8]) -> (u16, String, HashMap<String, String>, Vec<u8>) {
    let end = wire.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = std::str::from_utf8(&wire[..end]).unwrap();
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap();
    let mut parts = status_line.splitn(3, ' ');
    assert_eq!(parts.next(), Some("HTTP/1.1"));
    let code = parts.next().unwrap().parse().unwrap();
    let phrase = parts.next().unwrap().to_string();

    let headers = lines
        .map(|l| {
            let (k, v) = l.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();

    (code, phrase, headers, wire[end + 4..].to_vec())
}

#[test]
fn test_serialize_status_line() {
    let wire = serialize_response(&Response::ok(""));
    assert!(wire.starts_with(b"HTTP/1.1 200 OK\r\n"));
    assert!(wire.ends_with(b"\r\n\r\n"));
}

#[test]
fn test_serialize_round_trip() {
    let cases = vec![
        Response::ok(""),
        Response::ok("abc"),
        Response::created(),
        Response::not_found("Page not found."),
        Response::method_not_allowed(),
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(vec![0, 159, 146, 150, b'\r', b'\n'])
            .build(),
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Encoding", "gzip")
            .header("X-Extra", "a: b")
            .body(b"\x1f\x8b binary".to_vec())
            .build(),
    ];

    for response in cases {
        let wire = serialize_response(&response);
        let (code, phrase, headers, body) = reparse(&wire);

        assert_eq!(code, response.status.as_u16());
        assert_eq!(phrase, response.status.reason_phrase());
        assert_eq!(headers, response.headers);
        assert_eq!(body, response.body);
        assert_eq!(
            headers["Content-Length"].parse::<usize>().unwrap(),
            body.len()
        );
    }
}

#[tokio::test]
async fn test_writer_writes_everything() {
    let response = Response::ok("hello");
    let expected = serialize_response(&response);

    let mut out = Vec::new();
    let mut writer = ResponseWriter::from_bytes(serialize_response(&response));
    assert_eq!(writer.remaining(), expected.len());

    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, expected);
    assert_eq!(writer.remaining(), 0);
}
