//! Review comment actions.

use tracing::info;

use crate::common::{Actor, ActorContext, ArticleId, Capability, CommentId, CoreError};
use crate::domains::comments::models::Comment;
use crate::domains::notifications::{notify, DomainEvent};
use crate::kernel::ServerDeps;

/// Add a comment to an article. Requires the `add_comment` capability.
///
/// The article's author is notified unless they commented themselves.
pub async fn add_comment(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
    body: String,
) -> Result<Comment, CoreError> {
    Actor::from_context(actor)
        .can(Capability::AddComment)
        .check()?;

    let article = deps
        .store
        .find_article(article_id)
        .await?
        .ok_or(CoreError::NotFound("article"))?;

    if body.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "il commento non può essere vuoto".to_string(),
        ));
    }

    let comment = Comment::new(article_id, actor.user_id, body);
    deps.store.insert_comment(&comment).await?;

    info!(comment_id = %comment.id, article_id = %article_id, "Added comment");

    let profile = deps
        .store
        .find_user(actor.user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))?;
    notify(
        deps,
        &DomainEvent::CommentAdded {
            article,
            actor: profile,
        },
    )
    .await?;

    Ok(comment)
}

/// Comments for an article, oldest first.
pub async fn list_comments(
    deps: &ServerDeps,
    article_id: ArticleId,
) -> Result<Vec<Comment>, CoreError> {
    let comments = deps.store.list_comments_by_article(article_id).await?;
    Ok(comments)
}

/// Remove a comment. Requires the `delete_comment` capability (admin only).
pub async fn delete_comment(
    deps: &ServerDeps,
    actor: &ActorContext,
    comment_id: CommentId,
) -> Result<(), CoreError> {
    Actor::from_context(actor)
        .can(Capability::DeleteComment)
        .check()?;

    deps.store
        .delete_comment(comment_id)
        .await
        .map_err(CoreError::from_store("comment"))?;

    info!(comment_id = %comment_id, "Deleted comment");
    Ok(())
}
