use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ChatMessageId, UserId};

/// A message in the team chat room.
///
/// Edit and delete are restricted to the author; the store enforces this by
/// matching on both id and author_id, so a mismatched request fails instead
/// of silently doing nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub body: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn new(author_id: UserId, body: String) -> Self {
        Self {
            id: ChatMessageId::new(),
            body,
            author_id,
            created_at: Utc::now(),
            edited_at: None,
        }
    }
}
