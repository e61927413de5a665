//! HTTP adapter
//!
//! Implementation of the FeedSource port against the feed service.

pub mod client;

pub use client::HttpFeedClient;
