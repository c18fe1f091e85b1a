use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional endpoint notifications are POSTed to; no-op sink when unset.
    pub webhook_url: Option<String>,
    /// Optional bearer token for the webhook endpoint.
    pub webhook_token: Option<String>,
    /// Window for the "online now" user list, in minutes.
    pub online_window_minutes: i64,
    /// Per-topic buffer of the change feed.
    pub feed_channel_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            webhook_url: env::var("WEBHOOK_URL").ok(),
            webhook_token: env::var("WEBHOOK_TOKEN").ok(),
            online_window_minutes: env::var("ONLINE_WINDOW_MINUTES")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("ONLINE_WINDOW_MINUTES must be a valid number")?,
            feed_channel_capacity: env::var("FEED_CHANNEL_CAPACITY")
                .unwrap_or_else(|_| "256".to_string())
                .parse()
                .context("FEED_CHANNEL_CAPACITY must be a valid number")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_token: None,
            online_window_minutes: 5,
            feed_channel_capacity: 256,
        }
    }
}
