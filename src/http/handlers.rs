//! Route handlers. Each one turns a matched route into a `Response`.

use tracing::warn;

use crate::http::encoding::ContentEncoding;
use crate::http::request::Request;
use crate::http::response::{OCTET_STREAM, Response, ResponseBuilder, StatusCode};
use crate::store::{FileStore, StoreError};

pub const EMPTY_ECHO: &str = "Echo path is empty";
pub const PAGE_NOT_FOUND: &str = "Page not found.";
pub const FILE_NOT_FOUND: &str = "File not found or error reading.";
pub const WRITE_FAILED: &str = "Error writing file.";

pub fn root() -> Response {
    Response::ok("")
}

pub fn user_agent(req: &Request) -> Response {
    Response::ok(req.user_agent())
}

/// Echoes `text` back, gzip-compressed when the client accepts it.
///
/// An empty `text` is a 404 and is never compressed.
pub fn echo(text: &str, encoding: ContentEncoding) -> Response {
    if text.is_empty() {
        return Response::not_found(EMPTY_ECHO);
    }

    match encoding.encode(text.as_bytes()) {
        Ok(body) => ResponseBuilder::new(StatusCode::Ok)
            .encoding(encoding)
            .body(body)
            .build(),
        Err(e) => {
            warn!(error = %e, "Failed to compress echo body");
            Response::internal_error("Compression failed.")
        }
    }
}

pub fn read_file(store: &FileStore, name: &str) -> Response {
    match store.read(name) {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", OCTET_STREAM)
            .body(contents)
            .build(),
        Err(e) => {
            warn!(file = name, error = %e, "File read failed");
            Response::not_found(FILE_NOT_FOUND)
        }
    }
}

/// Writes the request body to `name`.
///
/// Rejected names answer 404 like the read side; genuine I/O failures
/// answer 500.
pub fn write_file(store: &FileStore, name: &str, body: &[u8]) -> Response {
    match store.write(name, body) {
        Ok(()) => Response::created(),
        Err(e @ StoreError::InvalidName(_)) => {
            warn!(file = name, error = %e, "File write rejected");
            Response::not_found(WRITE_FAILED)
        }
        Err(e) => {
            warn!(file = name, error = %e, "File write failed");
            Response::internal_error(WRITE_FAILED)
        }
    }
}

pub fn not_found() -> Response {
    Response::not_found(PAGE_NOT_FOUND)
}

pub fn method_not_allowed() -> Response {
    Response::method_not_allowed()
}
