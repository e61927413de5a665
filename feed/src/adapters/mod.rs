//! Adapters layer
//!
//! Concrete implementations of domain port traits.
//! - `http`: the feed service over HTTP (reqwest)
//! - `tracing_sink`: diagnostics forwarded to `tracing`

pub mod http;
pub mod tracing_sink;

pub use http::HttpFeedClient;
pub use tracing_sink::TracingDiagnostics;
