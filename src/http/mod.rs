//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1: one request per connection, no keep-alive,
//! no chunked bodies, GET and POST only.
//!
//! # Architecture
//!
//! - **`parser`**: Decodes a request from a single read buffer
//! - **`request`**: HTTP request representation
//! - **`router`**: Maps method and path onto the fixed route table
//! - **`handlers`**: One function per route
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes responses
//! - **`connection`**: Per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of the request
//!        └──────┬──────┘
//!               │ Bytes received (none → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Decode, route, handle
//!        └──────┬───────────┘
//!               │ Response ready (malformed → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```
//! use bytehttp::app::App;
//! use bytehttp::store::FileStore;
//!
//! let app = App::new(FileStore::new("."));
//! let reply = app.respond(b"GET / HTTP/1.1\r\n\r\n").unwrap();
//! assert!(reply.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

pub mod connection;
pub mod encoding;
pub mod handlers;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
