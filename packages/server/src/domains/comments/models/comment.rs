use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ArticleId, CommentId, UserId};

/// A review comment on an article.
///
/// Append-only: comments have no edit operation and are listed in creation
/// order. Authored by verificatori/amministratori only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(article_id: ArticleId, author_id: UserId, body: String) -> Self {
        Self {
            id: CommentId::new(),
            article_id,
            author_id,
            body,
            created_at: Utc::now(),
        }
    }
}
