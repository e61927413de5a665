//! Inbox viewer
//!
//! Headless rendition of the inbox screen: activates the feed once, waits
//! for the fetch to finish and prints the rendered list to stdout.
//! Configured with `FEED_API_URL` (default `http://localhost:5000`).

use std::sync::Arc;

use anyhow::{Context, Result};
use inbox_feed::{
    render_text, FeedConfig, FeedListRenderer, FeedStore, HttpFeedClient, TracingDiagnostics,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered feed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = FeedConfig::from_env().context("Invalid feed configuration")?;
    tracing::info!(url = %config.messages_url(), "Starting inbox viewer");

    let client = HttpFeedClient::new(&config).context("Failed to build feed client")?;
    let store = FeedStore::new(Arc::new(client), Arc::new(TracingDiagnostics));
    let mut screen = FeedListRenderer::new(store);

    screen.activate();
    let list = screen
        .settle()
        .await
        .context("Feed store was torn down before the fetch finished")?;

    print!("{}", render_text(list));
    tracing::debug!(phase = %screen.phase(), "Feed settled");

    screen.deactivate();
    Ok(())
}
