//! Domain ports (traits)
//!
//! Port traits define interfaces that the store requires.
//! Adapters provide concrete implementations of these traits.

pub mod diagnostics;
pub mod feed_source;

pub use diagnostics::DiagnosticSink;
pub use feed_source::FeedSource;
