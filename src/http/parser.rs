use crate::http::request::{Method, Request, RequestBuilder};

/// Reasons a request buffer could not be decoded.
///
/// A decode failure closes the connection without a response.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("request line is not valid UTF-8")]
    InvalidEncoding,
    #[error("malformed request line")]
    InvalidRequestLine,
}

/// Decodes a request from a single read buffer.
///
/// The buffer is expected to hold the whole request. Bodies that did not fit
/// in the read (or arrive in a later segment) are simply truncated; there is
/// no `Content-Length` driven continuation.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let buf = strip_nul_padding(buf);
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    // Look for header/body separator
    let (head_bytes, body_bytes) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], &buf[end + 4..]),
        None => (buf, &[][..]),
    };

    let mut lines = split_lines(head_bytes).into_iter();

    // Request line, the only part that must be valid UTF-8
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let request_line =
        std::str::from_utf8(request_line).map_err(|_| ParseError::InvalidEncoding)?;
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::InvalidRequestLine);
    };

    let mut builder = RequestBuilder::new()
        .method(Method::parse(method))
        .path(path)
        .version(version)
        .body(body_bytes.to_vec());

    for line in lines {
        if line.is_empty() {
            break;
        }

        // Undecodable lines and lines without the separator are skipped
        let Ok(line) = std::str::from_utf8(line) else {
            continue;
        };
        if let Some((key, value)) = line.split_once(": ") {
            builder = builder.header(key, value);
        }
    }

    builder.build().map_err(|_| ParseError::InvalidRequestLine)
}

/// Splits on CRLF the way `str::split("\r\n")` would, but over raw bytes.
fn split_lines(buf: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;

    while let Some(i) = buf[start..].windows(2).position(|w| w == b"\r\n") {
        lines.push(&buf[start..start + i]);
        start += i + 2;
    }
    lines.push(&buf[start..]);

    lines
}

fn strip_nul_padding(buf: &[u8]) -> &[u8] {
    let end = buf.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &buf[..end]
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    }

    #[test]
    fn strips_padding_from_fixed_buffer() {
        let mut buf = [0u8; 64];
        let raw = b"POST /files/a HTTP/1.1\r\n\r\nhi";
        buf[..raw.len()].copy_from_slice(raw);

        let parsed = parse_http_request(&buf).unwrap();
        assert_eq!(parsed.body, b"hi");
    }

    #[test]
    fn split_lines_matches_str_split() {
        let lines = split_lines(b"a\r\nb\r\n");
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..], &b""[..]]);
    }

    #[test]
    fn all_padding_is_empty() {
        assert_eq!(parse_http_request(&[0u8; 16]).unwrap_err(), ParseError::Empty);
    }
}
