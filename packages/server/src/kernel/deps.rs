//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container passed to every
//! domain action. All external collaborators sit behind trait abstractions
//! to enable testing.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::memory_store::MemoryStore;
use crate::kernel::stream_hub::ChangeFeed;
use crate::kernel::traits::{BaseDeliveryService, BaseStore};
use crate::kernel::webhook::{NoopDelivery, WebhookDelivery};

/// Server dependencies accessible to domain actions.
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseStore>,
    /// In-process change feed mirroring store mutations to subscribers.
    pub feed: ChangeFeed,
    pub delivery: Arc<dyn BaseDeliveryService>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BaseStore>,
        feed: ChangeFeed,
        delivery: Arc<dyn BaseDeliveryService>,
    ) -> Self {
        Self {
            store,
            feed,
            delivery,
        }
    }

    /// Wire the default stack from configuration: in-memory store publishing
    /// on the change feed, webhook delivery when an endpoint is configured,
    /// no-op delivery otherwise.
    pub fn from_config(config: &Config) -> Self {
        let feed = ChangeFeed::with_capacity(config.feed_channel_capacity);
        let store = Arc::new(MemoryStore::new(feed.clone()));
        let delivery: Arc<dyn BaseDeliveryService> = match &config.webhook_url {
            Some(url) => Arc::new(WebhookDelivery::new(
                url.clone(),
                config.webhook_token.clone(),
            )),
            None => Arc::new(NoopDelivery),
        };
        Self::new(store, feed, delivery)
    }
}
