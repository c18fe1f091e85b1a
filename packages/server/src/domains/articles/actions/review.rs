//! Review transitions: submit, approve, reject.
//!
//! Each action validates permission and transition BEFORE the store write,
//! then runs the notification fan-out. Status write and fan-out happen in
//! one invocation; committed steps are never rolled back if a later step
//! fails (retries may duplicate notifications, which is accepted).

use tracing::info;

use crate::common::{Actor, ActorContext, ArticleId, AuthError, Capability, CoreError};
use crate::domains::articles::models::{Article, ArticleStatus};
use crate::domains::articles::workflow::{self, WorkflowAction};
use crate::domains::notifications::{notify, DomainEvent};
use crate::domains::users::models::User;
use crate::kernel::ServerDeps;

async fn load_article(deps: &ServerDeps, id: ArticleId) -> Result<Article, CoreError> {
    deps.store
        .find_article(id)
        .await?
        .ok_or(CoreError::NotFound("article"))
}

async fn load_actor_profile(deps: &ServerDeps, actor: &ActorContext) -> Result<User, CoreError> {
    deps.store
        .find_user(actor.user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))
}

/// Submit a draft (or a rejected article) for review. Author only.
///
/// Fans out `nuovo_articolo` to every verificatore/amministratore except the
/// author.
pub async fn submit_for_review(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
) -> Result<Article, CoreError> {
    let article = load_article(deps, article_id).await?;

    if article.author_id != actor.user_id {
        return Err(AuthError::NotOwner.into());
    }

    let resubmission = article.status == ArticleStatus::Rifiutato;
    let next = workflow::apply(article.status, WorkflowAction::SubmitForReview)?;

    let updated = deps
        .store
        .update_article_status(article_id, next)
        .await
        .map_err(CoreError::from_store("article"))?;

    info!(article_id = %article_id, status = %next, resubmission, "Submitted article for review");

    let profile = load_actor_profile(deps, actor).await?;
    notify(
        deps,
        &DomainEvent::ArticleSubmitted {
            article: updated.clone(),
            actor: profile,
            resubmission,
        },
    )
    .await?;

    Ok(updated)
}

/// Approve an article in review. Requires the `approve_article` capability.
///
/// The author is notified unless they approved their own article.
pub async fn approve(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
) -> Result<Article, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ApproveArticle)
        .check()?;

    let article = load_article(deps, article_id).await?;
    let next = workflow::apply(article.status, WorkflowAction::Approve)?;

    let updated = deps
        .store
        .update_article_status(article_id, next)
        .await
        .map_err(CoreError::from_store("article"))?;

    info!(article_id = %article_id, reviewer_id = %actor.user_id, "Approved article");

    let profile = load_actor_profile(deps, actor).await?;
    notify(
        deps,
        &DomainEvent::ArticleApproved {
            article: updated.clone(),
            actor: profile,
        },
    )
    .await?;

    Ok(updated)
}

/// Reject an article in review. Requires the `approve_article` capability.
pub async fn reject(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
) -> Result<Article, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ApproveArticle)
        .check()?;

    let article = load_article(deps, article_id).await?;
    let next = workflow::apply(article.status, WorkflowAction::Reject)?;

    let updated = deps
        .store
        .update_article_status(article_id, next)
        .await
        .map_err(CoreError::from_store("article"))?;

    info!(article_id = %article_id, reviewer_id = %actor.user_id, "Rejected article");

    let profile = load_actor_profile(deps, actor).await?;
    notify(
        deps,
        &DomainEvent::ArticleRejected {
            article: updated.clone(),
            actor: profile,
        },
    )
    .await?;

    Ok(updated)
}
