//! The request pipeline: decode, route, handle, encode.
//!
//! Everything here is synchronous and free of network I/O, so a full
//! request/response exchange can be driven from a byte slice.

use tracing::info;

use crate::config::Config;
use crate::http::encoding::ContentEncoding;
use crate::http::handlers;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Route;
use crate::http::writer::serialize_response;
use crate::store::FileStore;

/// Shared, read-only state handed to every connection.
#[derive(Debug, Clone)]
pub struct App {
    store: FileStore,
}

impl App {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(FileStore::new(cfg.directory.clone()))
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Dispatches a decoded request to its handler.
    pub fn handle(&self, req: &Request) -> Response {
        let route = Route::resolve(&req.method, &req.path);

        let response = match route {
            Route::Root => handlers::root(),
            Route::UserAgent => handlers::user_agent(req),
            Route::Echo(text) => handlers::echo(text, ContentEncoding::negotiate(&req.headers)),
            Route::ReadFile(name) => handlers::read_file(&self.store, name),
            Route::WriteFile(name) => handlers::write_file(&self.store, name, &req.body),
            Route::NotFound => handlers::not_found(),
            Route::MethodNotAllowed => handlers::method_not_allowed(),
        };

        info!(
            method = %req.method,
            path = %req.path,
            route = route.name(),
            status = response.status.as_u16(),
            "Handled request"
        );

        response
    }

    /// Turns raw request bytes into raw response bytes.
    ///
    /// A decode failure yields no response at all; the caller is expected
    /// to close the connection.
    pub fn respond(&self, raw: &[u8]) -> Result<Vec<u8>, ParseError> {
        let request = parse_http_request(raw)?;
        Ok(serialize_response(&self.handle(&request)))
    }
}
