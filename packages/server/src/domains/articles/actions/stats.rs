//! Newsroom-wide dashboard statistics.

use serde::Serialize;

use crate::common::{Actor, ActorContext, Capability, CoreError};
use crate::domains::articles::models::ArticleStatus;
use crate::kernel::ServerDeps;

/// Aggregate article counters for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_articles: usize,
    pub in_review: usize,
    /// Approvato and pubblicato count together for display.
    pub approved: usize,
    pub rejected: usize,
    /// Articles authored by the requesting admin.
    pub my_articles: usize,
    /// Articles currently waiting for a reviewer decision.
    pub to_review: usize,
}

/// Compute the dashboard counters. Requires the `view_stats` capability.
pub async fn dashboard_stats(
    deps: &ServerDeps,
    actor: &ActorContext,
) -> Result<DashboardStats, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ViewStats)
        .check()?;

    let articles = deps.store.list_articles().await?;
    let in_review = articles
        .iter()
        .filter(|a| a.status == ArticleStatus::InRevisione)
        .count();

    Ok(DashboardStats {
        total_articles: articles.len(),
        in_review,
        approved: articles.iter().filter(|a| a.status.is_approved()).count(),
        rejected: articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Rifiutato)
            .count(),
        my_articles: articles
            .iter()
            .filter(|a| a.author_id == actor.user_id)
            .count(),
        to_review: in_review,
    })
}
