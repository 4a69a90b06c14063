use std::collections::HashMap;
use std::io::Read;

use bytehttp::http::encoding::{ContentEncoding, gzip};
use flate2::read::GzDecoder;

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_negotiate_gzip() {
    let h = headers(&[("Accept-Encoding", "gzip")]);
    assert_eq!(ContentEncoding::negotiate(&h), ContentEncoding::Gzip);
}

#[test]
fn test_negotiate_gzip_in_list() {
    let h = headers(&[("Accept-Encoding", "invalid-1, gzip, deflate")]);
    assert_eq!(ContentEncoding::negotiate(&h), ContentEncoding::Gzip);
}

#[test]
fn test_negotiate_substring_match() {
    let h = headers(&[("Accept-Encoding", "x-gzipped")]);
    assert_eq!(ContentEncoding::negotiate(&h), ContentEncoding::Gzip);
}

#[test]
fn test_negotiate_identity() {
    assert_eq!(
        ContentEncoding::negotiate(&headers(&[])),
        ContentEncoding::Identity
    );
    assert_eq!(
        ContentEncoding::negotiate(&headers(&[("Accept-Encoding", "deflate, br")])),
        ContentEncoding::Identity
    );
    // Header names are matched exactly
    assert_eq!(
        ContentEncoding::negotiate(&headers(&[("accept-encoding", "gzip")])),
        ContentEncoding::Identity
    );
}

#[test]
fn test_gzip_decompresses_to_input() {
    let compressed = gzip(b"abc").unwrap();
    assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

    let mut out = Vec::new();
    GzDecoder::new(&compressed[..]).read_to_end(&mut out).unwrap();
    assert_eq!(out, b"abc");
}

#[test]
fn test_identity_encode_is_passthrough() {
    assert_eq!(ContentEncoding::Identity.encode(b"abc").unwrap(), b"abc");
    assert_eq!(ContentEncoding::Identity.header_value(), None);
    assert_eq!(ContentEncoding::Gzip.header_value(), Some("gzip"));
}
