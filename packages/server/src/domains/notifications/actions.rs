//! Recipient-side notification operations.
//!
//! A notification is mutated only by its recipient: every call here is
//! scoped to the actor's own records.

use tracing::info;

use crate::common::{ActorContext, CoreError, NotificationId};
use crate::domains::notifications::models::Notification;
use crate::kernel::ServerDeps;

/// How many notifications the feed shows at most.
const FEED_LIMIT: usize = 50;

/// Latest notifications for the actor, newest first.
pub async fn list_notifications(
    deps: &ServerDeps,
    actor: &ActorContext,
) -> Result<Vec<Notification>, CoreError> {
    let notifications = deps
        .store
        .list_notifications(actor.user_id, FEED_LIMIT)
        .await?;
    Ok(notifications)
}

/// Number of unread notifications for the actor.
pub async fn unread_count(deps: &ServerDeps, actor: &ActorContext) -> Result<u64, CoreError> {
    let count = deps.store.count_unread_notifications(actor.user_id).await?;
    Ok(count)
}

/// Mark one of the actor's notifications as read.
pub async fn mark_as_read(
    deps: &ServerDeps,
    actor: &ActorContext,
    id: NotificationId,
) -> Result<(), CoreError> {
    deps.store
        .mark_notification_read(id, actor.user_id)
        .await
        .map_err(CoreError::from_store("notification"))
}

/// Mark every unread notification of the actor as read.
///
/// Idempotent: a second call affects zero rows and succeeds.
pub async fn mark_all_as_read(deps: &ServerDeps, actor: &ActorContext) -> Result<u64, CoreError> {
    let updated = deps.store.mark_all_notifications_read(actor.user_id).await?;
    info!(user_id = %actor.user_id, updated, "Marked all notifications read");
    Ok(updated)
}

/// Delete one of the actor's notifications.
pub async fn delete_notification(
    deps: &ServerDeps,
    actor: &ActorContext,
    id: NotificationId,
) -> Result<(), CoreError> {
    deps.store
        .delete_notification(id, actor.user_id)
        .await
        .map_err(CoreError::from_store("notification"))
}
