use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::utils::generate_excerpt;
use crate::common::{ArticleId, UserId};

/// Maximum excerpt length, trailing ellipsis included.
pub const EXCERPT_MAX_LENGTH: usize = 250;

/// The fixed set of article categories.
pub const ARTICLE_CATEGORIES: [&str; 8] = [
    "Attualità",
    "Scienza e Tecnologia",
    "Sport",
    "Cultura",
    "Eventi Scolastici",
    "Interviste",
    "Opinioni",
    "Recensioni",
];

/// An article moving through the editorial workflow.
///
/// `status` only ever changes through the workflow transitions; `excerpt` is
/// re-derived from `body` on every content update and never edited on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub excerpt: String,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i32,
}

impl Article {
    /// Build a new draft. The excerpt is derived from the body here and on
    /// every later content update.
    pub fn new_draft(
        title: String,
        body: String,
        author_id: UserId,
        category: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let excerpt = generate_excerpt(&body, EXCERPT_MAX_LENGTH);
        Self {
            id: ArticleId::new(),
            title,
            body,
            excerpt,
            author_id,
            status: ArticleStatus::Bozza,
            category,
            created_at: now,
            updated_at: now,
            published_at: None,
            views: 0,
        }
    }
}

/// Article lifecycle status.
///
/// The serialized values are part of the external contract: `bozza`,
/// `in_revisione`, `approvato`, `rifiutato`, `pubblicato`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Bozza,
    InRevisione,
    Approvato,
    Rifiutato,
    /// Set by an external publishing step, never by a workflow transition.
    /// Display-equivalent to `Approvato`.
    Pubblicato,
}

impl ArticleStatus {
    /// Whether the article counts as approved for display and statistics.
    pub fn is_approved(&self) -> bool {
        matches!(self, ArticleStatus::Approvato | ArticleStatus::Pubblicato)
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleStatus::Bozza => write!(f, "bozza"),
            ArticleStatus::InRevisione => write!(f, "in_revisione"),
            ArticleStatus::Approvato => write!(f, "approvato"),
            ArticleStatus::Rifiutato => write!(f, "rifiutato"),
            ArticleStatus::Pubblicato => write!(f, "pubblicato"),
        }
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bozza" => Ok(ArticleStatus::Bozza),
            "in_revisione" => Ok(ArticleStatus::InRevisione),
            "approvato" => Ok(ArticleStatus::Approvato),
            "rifiutato" => Ok(ArticleStatus::Rifiutato),
            "pubblicato" => Ok(ArticleStatus::Pubblicato),
            _ => Err(anyhow::anyhow!("Invalid article status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_derives_excerpt() {
        let article = Article::new_draft(
            "Test".to_string(),
            "<p>Hello world</p>".to_string(),
            UserId::new(),
            None,
        );
        assert_eq!(article.status, ArticleStatus::Bozza);
        assert_eq!(article.excerpt, "Hello world");
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(ArticleStatus::Bozza.to_string(), "bozza");
        assert_eq!(ArticleStatus::InRevisione.to_string(), "in_revisione");
        assert_eq!(ArticleStatus::Approvato.to_string(), "approvato");
        assert_eq!(ArticleStatus::Rifiutato.to_string(), "rifiutato");
        assert_eq!(ArticleStatus::Pubblicato.to_string(), "pubblicato");

        let json = serde_json::to_string(&ArticleStatus::InRevisione).unwrap();
        assert_eq!(json, "\"in_revisione\"");
    }

    #[test]
    fn test_pubblicato_counts_as_approved() {
        assert!(ArticleStatus::Approvato.is_approved());
        assert!(ArticleStatus::Pubblicato.is_approved());
        assert!(!ArticleStatus::InRevisione.is_approved());
    }
}
