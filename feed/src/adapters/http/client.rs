//! Feed service HTTP client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::FeedConfig;
use crate::domain::entities::MessageRecord;
use crate::domain::ports::FeedSource;
use crate::error::{ConfigError, FetchError};

/// HTTP client for the message collection endpoint
#[derive(Clone)]
pub struct HttpFeedClient {
    http: Client,
    messages_url: String,
}

impl HttpFeedClient {
    pub fn new(config: &FeedConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            messages_url: config.messages_url(),
        })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<MessageRecord>, FetchError> {
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        // A dropped connection mid-body surfaces as a transport failure
        let body = response.bytes().await?;

        let records: Vec<MessageRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, FetchError> {
        tracing::debug!(url = %self.messages_url, "Fetching messages");

        let response = self
            .http
            .get(&self.messages_url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let records = self.handle_response(response).await?;

        tracing::debug!(count = records.len(), "Received messages");
        Ok(records)
    }
}
