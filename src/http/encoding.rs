//! Content negotiation for response bodies.
//!
//! The only supported coding is gzip. Negotiation just tells a handler what
//! the client will accept; whether a body is actually compressed is the
//! handler's call.

use std::collections::HashMap;
use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentEncoding {
    #[default]
    Identity,
    Gzip,
}

impl ContentEncoding {
    /// Picks an encoding from the request headers.
    ///
    /// Any `Accept-Encoding` value containing `gzip` as a substring selects
    /// gzip. q-values and token boundaries are not inspected.
    pub fn negotiate(headers: &HashMap<String, String>) -> Self {
        match headers.get("Accept-Encoding") {
            Some(value) if value.contains("gzip") => ContentEncoding::Gzip,
            _ => ContentEncoding::Identity,
        }
    }

    /// Value for the `Content-Encoding` header, if one should be sent.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentEncoding::Identity => None,
            ContentEncoding::Gzip => Some("gzip"),
        }
    }

    /// Applies this encoding to `body`.
    pub fn encode(&self, body: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Identity => Ok(body.to_vec()),
            ContentEncoding::Gzip => gzip(body),
        }
    }
}

/// Compresses `body` into a complete gzip member.
pub fn gzip(body: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}
