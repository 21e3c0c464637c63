// file: src/client/mod.rs
// description: query service client module exports
// reference: internal module structure

pub mod http;
pub mod transport;

pub use http::HttpTransport;
pub use transport::{Transport, TransportResponse};
