//! bytehttp - a minimal HTTP/1.1 server on raw byte streams.
//!
//! The core is [`app::App::respond`]: request bytes in, response bytes out.
//! [`server`] wraps it in a tokio accept loop.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
pub mod store;
