//! Networking: wire types and the HTTP client layer.

pub mod http;
pub mod types;
