//! Inbox feed
//!
//! Fetches the message collection from the feed service and renders it as
//! a keyed list for the inbox screen. Uses hexagonal (ports & adapters)
//! architecture: the store depends on the `FeedSource` and
//! `DiagnosticSink` ports, adapters provide the HTTP and tracing versions.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{HttpFeedClient, TracingDiagnostics};
pub use app::{FeedPhase, FeedStore};
pub use config::FeedConfig;
pub use domain::entities::{MessageId, MessageRecord};
pub use domain::ports::{DiagnosticSink, FeedSource};
pub use error::{ConfigError, FetchError, FetchErrorKind};
pub use feed::{render_text, FeedList, FeedListRenderer, FeedRow};
