//! Feed source port trait
//!
//! Defines the interface for retrieving the message collection.

use async_trait::async_trait;

use crate::domain::entities::MessageRecord;
use crate::error::FetchError;

/// Port trait for fetching the message feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the full message collection in service order.
    ///
    /// One attempt per call, no retries. Implementations must return every
    /// failure as a `FetchError` and never panic.
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, FetchError>;
}
