//! Notification engine - resolves a domain event into per-recipient records.
//!
//! A pure fan-out: one unread record per resolved recipient, inserted
//! independently (a failure mid-sequence leaves the earlier records in
//! place). The engine never deduplicates across rapid repeated events, never
//! batches and never retries. Record creation is durable; pushing the record
//! towards a device through the delivery sink is fire-and-forget.

use tracing::{error, info};
use uuid::Uuid;

use crate::common::utils::truncate_chars;
use crate::common::{CoreError, Role, UserId};
use crate::domains::notifications::events::DomainEvent;
use crate::domains::notifications::models::{Notification, NotificationKind};
use crate::kernel::ServerDeps;

/// A resolved recipient with its message, not yet persisted.
struct Draft {
    recipient_id: UserId,
    kind: NotificationKind,
    title: String,
    message: String,
    reference_id: Option<Uuid>,
}

/// Fan a domain event out to its recipients.
///
/// Returns the created records (all with `read = false`). Actors are never
/// notified about their own actions.
pub async fn notify(deps: &ServerDeps, event: &DomainEvent) -> Result<Vec<Notification>, CoreError> {
    let drafts = resolve(deps, event).await?;

    let mut created = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let notification = Notification::new(
            draft.recipient_id,
            draft.kind,
            draft.title,
            draft.message,
            draft.reference_id,
        );
        deps.store.insert_notification(&notification).await?;

        // Fire-and-forget: a failed delivery never rolls back the record and
        // is never surfaced to the actor that triggered the event.
        if let Err(err) = deps.delivery.deliver(&notification).await {
            error!(
                notification_id = %notification.id,
                recipient_id = %notification.recipient_id,
                "Notification delivery failed: {err}"
            );
        }

        created.push(notification);
    }

    info!(count = created.len(), "Notification fan-out complete");
    Ok(created)
}

/// Resolve the recipient set and message for one event.
async fn resolve(deps: &ServerDeps, event: &DomainEvent) -> Result<Vec<Draft>, CoreError> {
    let drafts = match event {
        DomainEvent::ArticleSubmitted {
            article,
            actor,
            resubmission,
        } => {
            // Every reviewer and admin, except the submitting author
            let reviewers = deps
                .store
                .list_users_by_roles(&[Role::Verificatore, Role::Amministratore])
                .await?;

            let (title, message) = if *resubmission {
                (
                    "Articolo aggiornato e inviato",
                    format!(
                        "{} ha aggiornato e inviato un articolo per la revisione",
                        actor.display_name()
                    ),
                )
            } else {
                (
                    "Nuovo articolo da revisionare",
                    format!(
                        "{} ha inviato un articolo per la revisione",
                        actor.display_name()
                    ),
                )
            };

            reviewers
                .into_iter()
                .filter(|reviewer| reviewer.id != actor.id)
                .map(|reviewer| Draft {
                    recipient_id: reviewer.id,
                    kind: NotificationKind::NuovoArticolo,
                    title: title.to_string(),
                    message: message.clone(),
                    reference_id: Some(article.id.into_uuid()),
                })
                .collect()
        }

        DomainEvent::ArticleApproved { article, actor } => {
            author_draft(
                article.author_id,
                actor.id,
                NotificationKind::ArticoloApprovato,
                "Articolo approvato!",
                format!("Il tuo articolo \"{}\" è stato approvato", article.title),
                article.id.into_uuid(),
            )
        }

        DomainEvent::ArticleRejected { article, actor } => {
            author_draft(
                article.author_id,
                actor.id,
                NotificationKind::ArticoloRifiutato,
                "Articolo rifiutato",
                format!("Il tuo articolo \"{}\" è stato rifiutato", article.title),
                article.id.into_uuid(),
            )
        }

        DomainEvent::CommentAdded { article, actor } => {
            author_draft(
                article.author_id,
                actor.id,
                NotificationKind::NuovoCommento,
                "Nuovo commento sul tuo articolo",
                format!("{} ha commentato il tuo articolo", actor.display_name()),
                article.id.into_uuid(),
            )
        }

        DomainEvent::TodoAssigned { todo, actor } => match todo.assigned_to {
            Some(assignee) if assignee != actor.id => vec![Draft {
                recipient_id: assignee,
                kind: NotificationKind::TodoAssegnato,
                title: "Nuovo compito assegnato".to_string(),
                message: format!(
                    "{} ti ha assegnato un nuovo compito: \"{}\"",
                    actor.display_name(),
                    todo.title
                ),
                reference_id: Some(todo.id.into_uuid()),
            }],
            _ => Vec::new(),
        },

        DomainEvent::ChatMessagePosted { message, actor } => {
            // Everyone in the newsroom except the message author
            let users = deps.store.list_users().await?;
            let preview = format!(
                "{}: {}...",
                actor.display_name(),
                truncate_chars(&message.body, 50)
            );

            users
                .into_iter()
                .filter(|user| user.id != actor.id)
                .map(|user| Draft {
                    recipient_id: user.id,
                    kind: NotificationKind::ChatMessage,
                    title: "Nuovo messaggio in chat".to_string(),
                    message: preview.clone(),
                    reference_id: None,
                })
                .collect()
        }

        DomainEvent::RoleChanged { user } => vec![Draft {
            recipient_id: user.id,
            kind: NotificationKind::Sistema,
            title: "Ruolo aggiornato".to_string(),
            message: format!("Il tuo ruolo è stato aggiornato a: {}", user.role.label()),
            reference_id: None,
        }],
    };

    Ok(drafts)
}

/// The "notify the article's author unless they did it themselves" rule
/// shared by approve/reject/comment events.
fn author_draft(
    author_id: UserId,
    actor_id: UserId,
    kind: NotificationKind,
    title: &str,
    message: String,
    reference_id: Uuid,
) -> Vec<Draft> {
    if author_id == actor_id {
        return Vec::new();
    }
    vec![Draft {
        recipient_id: author_id,
        kind,
        title: title.to_string(),
        message,
        reference_id: Some(reference_id),
    }]
}
