//! Team chat actions.
//!
//! Sending is open to any authenticated user. Edit and delete go through the
//! store's (id, author) matched mutation, so only the author ever succeeds.

use tracing::info;

use crate::common::{ActorContext, ChatMessageId, CoreError};
use crate::domains::chat::models::ChatMessage;
use crate::domains::notifications::{notify, DomainEvent};
use crate::kernel::ServerDeps;

/// Post a message to the team room.
///
/// Fans out a `chat_message` notification to every user except the author.
pub async fn send_message(
    deps: &ServerDeps,
    actor: &ActorContext,
    body: String,
) -> Result<ChatMessage, CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "il messaggio non può essere vuoto".to_string(),
        ));
    }

    let message = ChatMessage::new(actor.user_id, body);
    deps.store.insert_chat_message(&message).await?;

    info!(message_id = %message.id, author_id = %actor.user_id, "Sent chat message");

    let profile = deps
        .store
        .find_user(actor.user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))?;
    notify(
        deps,
        &DomainEvent::ChatMessagePosted {
            message: message.clone(),
            actor: profile,
        },
    )
    .await?;

    Ok(message)
}

/// Edit one's own message, stamping `edited_at`.
///
/// A request for someone else's message fails: the store matches on both id
/// and author.
pub async fn edit_message(
    deps: &ServerDeps,
    actor: &ActorContext,
    message_id: ChatMessageId,
    body: String,
) -> Result<ChatMessage, CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "il messaggio non può essere vuoto".to_string(),
        ));
    }

    let updated = deps
        .store
        .update_chat_message(message_id, actor.user_id, body)
        .await
        .map_err(CoreError::from_store("chat message"))?;

    info!(message_id = %message_id, "Edited chat message");
    Ok(updated)
}

/// Delete one's own message. Same (id, author) contract as editing.
pub async fn delete_message(
    deps: &ServerDeps,
    actor: &ActorContext,
    message_id: ChatMessageId,
) -> Result<(), CoreError> {
    deps.store
        .delete_chat_message(message_id, actor.user_id)
        .await
        .map_err(CoreError::from_store("chat message"))?;

    info!(message_id = %message_id, "Deleted chat message");
    Ok(())
}

/// Full room history, oldest first.
pub async fn list_messages(deps: &ServerDeps) -> Result<Vec<ChatMessage>, CoreError> {
    let messages = deps.store.list_chat_messages().await?;
    Ok(messages)
}
