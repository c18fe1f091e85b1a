use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{NotificationId, UserId};

/// A notification record for a single recipient.
///
/// Created exclusively by the notification engine as a side effect of domain
/// events; afterwards mutated only by its recipient (mark-read, delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Id of the entity that triggered this notification, when there is one.
    pub reference_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        recipient_id: UserId,
        kind: NotificationKind,
        title: String,
        message: String,
        reference_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            recipient_id,
            kind,
            title,
            message,
            read: false,
            reference_id,
            created_at: Utc::now(),
        }
    }
}

/// Notification type.
///
/// Serialized values are part of the external contract: `chat_message`,
/// `articolo_approvato`, `articolo_rifiutato`, `nuovo_commento`,
/// `nuovo_articolo`, `todo_assegnato`, `sistema`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ChatMessage,
    ArticoloApprovato,
    ArticoloRifiutato,
    NuovoCommento,
    NuovoArticolo,
    TodoAssegnato,
    Sistema,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::ChatMessage => write!(f, "chat_message"),
            NotificationKind::ArticoloApprovato => write!(f, "articolo_approvato"),
            NotificationKind::ArticoloRifiutato => write!(f, "articolo_rifiutato"),
            NotificationKind::NuovoCommento => write!(f, "nuovo_commento"),
            NotificationKind::NuovoArticolo => write!(f, "nuovo_articolo"),
            NotificationKind::TodoAssegnato => write!(f, "todo_assegnato"),
            NotificationKind::Sistema => write!(f, "sistema"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat_message" => Ok(NotificationKind::ChatMessage),
            "articolo_approvato" => Ok(NotificationKind::ArticoloApprovato),
            "articolo_rifiutato" => Ok(NotificationKind::ArticoloRifiutato),
            "nuovo_commento" => Ok(NotificationKind::NuovoCommento),
            "nuovo_articolo" => Ok(NotificationKind::NuovoArticolo),
            "todo_assegnato" => Ok(NotificationKind::TodoAssegnato),
            "sistema" => Ok(NotificationKind::Sistema),
            _ => Err(anyhow::anyhow!("Invalid notification kind: {}", s)),
        }
    }
}
