//! Generic in-process pub/sub hub for the store change feed.
//!
//! Provides topic-keyed broadcast channels carrying row change events.
//! Topics are opaque strings — the hub has no knowledge of what's being
//! streamed beyond the [`ChangeEvent`] envelope.
//!
//! # Usage
//!
//! Producers (the store, after each mutation):
//!   feed.publish("todos", ChangeEvent::insert("todos", row)).await;
//!
//! Consumers (UI adapters, realtime bridges):
//!   let rx = feed.subscribe("todos").await;
//!
//! Dropping the receiver unsubscribes it; `cleanup()` reaps channels that
//! have no subscribers left.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use serde::{Deserialize, Serialize};

use crate::common::UserId;

/// What happened to a row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A single row change, as delivered to feed subscribers.
///
/// `row` is the serialized record after the change (for deletes, the record
/// as it was). At-least-once per individual change; no ordering guarantee
/// across entities.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub entity: &'static str,
    pub op: ChangeOp,
    pub row: serde_json::Value,
}

impl ChangeEvent {
    pub fn insert(entity: &'static str, row: serde_json::Value) -> Self {
        Self {
            entity,
            op: ChangeOp::Insert,
            row,
        }
    }

    pub fn update(entity: &'static str, row: serde_json::Value) -> Self {
        Self {
            entity,
            op: ChangeOp::Update,
            row,
        }
    }

    pub fn delete(entity: &'static str, row: serde_json::Value) -> Self {
        Self {
            entity,
            op: ChangeOp::Delete,
            row,
        }
    }
}

/// Per-recipient notification topic, mirroring the notification table filter
/// a client would subscribe with.
pub fn notifications_topic(recipient: UserId) -> String {
    format!("notifications:{recipient}")
}

/// Generic in-process change feed.
///
/// Thread-safe, cloneable. Keyed by string topics.
#[derive(Clone)]
pub struct ChangeFeed {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<ChangeEvent>>>>,
    capacity: usize,
}

impl ChangeFeed {
    /// Create a new ChangeFeed with default capacity (256 events per channel).
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new ChangeFeed with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Publish a change event to a topic. No-op if no subscribers.
    pub async fn publish(&self, topic: &str, event: ChangeEvent) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(topic) {
            // Ignore send errors (no active receivers)
            let _ = tx.send(event);
        }
    }

    /// Subscribe to a topic. Creates the channel if it doesn't exist.
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<ChangeEvent> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0);
        tx.subscribe()
    }

    /// Remove channels with zero subscribers (housekeeping).
    pub async fn cleanup(&self) {
        let mut channels = self.channels.write().await;
        channels.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
