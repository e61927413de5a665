//! Application layer
//!
//! The store that drives fetches and owns the screen's feed state.

pub mod feed_store;

pub use feed_store::{FeedPhase, FeedStore};
