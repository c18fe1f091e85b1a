use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ArticleId, TodoId, UserId};

/// An item on the newsroom task board.
///
/// Visible and manageable only to verificatori/amministratori. Completion
/// can be toggled by any of them, not just the creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: TodoPriority,
    pub created_by: UserId,
    pub assigned_to: Option<UserId>,
    /// Optional link to the article this task is about.
    pub article_ref: Option<ArticleId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task priority.
///
/// Serialized values are part of the external contract: `bassa`, `media`, `alta`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Bassa,
    Media,
    Alta,
}

impl std::fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoPriority::Bassa => write!(f, "bassa"),
            TodoPriority::Media => write!(f, "media"),
            TodoPriority::Alta => write!(f, "alta"),
        }
    }
}

impl std::str::FromStr for TodoPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bassa" => Ok(TodoPriority::Bassa),
            "media" => Ok(TodoPriority::Media),
            "alta" => Ok(TodoPriority::Alta),
            _ => Err(anyhow::anyhow!("Invalid todo priority: {}", s)),
        }
    }
}

/// Fields for creating a new todo item.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: TodoPriority,
    pub assigned_to: Option<UserId>,
    pub article_ref: Option<ArticleId>,
}

impl TodoItem {
    pub fn new(input: NewTodo, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            title: input.title,
            description: input.description,
            completed: false,
            priority: input.priority,
            created_by,
            assigned_to: input.assigned_to,
            article_ref: input.article_ref,
            created_at: now,
            updated_at: now,
        }
    }
}
