use std::env;

use crate::error::ConfigError;

/// Fixed path of the message collection on the feed service
pub const MESSAGES_PATH: &str = "/messages";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the feed service, without trailing slash
    pub base_url: String,
}

impl FeedConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim_end_matches('/').to_string();

        reqwest::Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { base_url })
    }

    /// Load from `FEED_API_URL` (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("FEED_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(&base_url)
    }

    pub fn messages_url(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }
}
