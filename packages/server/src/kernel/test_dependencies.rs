// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::common::{DeliveryError, UserId};
use crate::domains::notifications::models::{Notification, NotificationKind};
use crate::kernel::deps::ServerDeps;
use crate::kernel::memory_store::MemoryStore;
use crate::kernel::stream_hub::ChangeFeed;
use crate::kernel::traits::BaseDeliveryService;

// =============================================================================
// Mock Delivery Service
// =============================================================================

/// A delivered notification as captured by the mock sink.
#[derive(Debug, Clone)]
pub struct DeliveredNotification {
    pub recipient_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

pub struct MockDeliveryService {
    delivered: Arc<Mutex<Vec<DeliveredNotification>>>,
    fail_all: bool,
}

impl MockDeliveryService {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            fail_all: false,
        }
    }

    /// Make every delivery fail, to exercise the fire-and-forget path.
    pub fn failing() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            fail_all: true,
        }
    }

    /// Get all notifications that were delivered
    pub fn delivered(&self) -> Vec<DeliveredNotification> {
        self.delivered.lock().unwrap().clone()
    }

    /// Check if a notification was delivered with the given title
    pub fn was_delivered_with_title(&self, title: &str) -> bool {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .any(|n| n.title == title)
    }

    /// Get the number of deliveries attempted successfully
    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl Default for MockDeliveryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDeliveryService for MockDeliveryService {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        if self.fail_all {
            return Err(DeliveryError("sink unreachable".to_string()));
        }

        self.delivered.lock().unwrap().push(DeliveredNotification {
            recipient_id: notification.recipient_id,
            kind: notification.kind,
            title: notification.title.clone(),
            message: notification.message.clone(),
        });
        Ok(())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub feed: ChangeFeed,
    pub delivery: Arc<MockDeliveryService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            feed: ChangeFeed::new(),
            delivery: Arc::new(MockDeliveryService::new()),
        }
    }

    /// Set a mock delivery service
    pub fn mock_delivery(mut self, delivery: MockDeliveryService) -> Self {
        self.delivery = Arc::new(delivery);
        self
    }

    /// Convert into ServerDeps over a fresh in-memory store
    pub fn into_deps(self) -> ServerDeps {
        let store = Arc::new(MemoryStore::new(self.feed.clone()));
        ServerDeps::new(store, self.feed, self.delivery)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
