//! Notification domain events.
//!
//! Events are immutable facts about what happened. Domain actions emit them
//! after the triggering mutation has been committed; the engine resolves each
//! into zero or more per-recipient notification records.
//!
//! Events carry the full actor profile because the message templates include
//! the actor's display name.

use crate::domains::articles::models::Article;
use crate::domains::chat::models::ChatMessage;
use crate::domains::todos::models::TodoItem;
use crate::domains::users::models::User;

/// A domain event the notification engine fans out.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// An author submitted (or resubmitted) an article for review.
    ArticleSubmitted {
        article: Article,
        actor: User,
        /// True when the article re-enters review after a rejection;
        /// reviewers see the "updated and submitted" wording.
        resubmission: bool,
    },

    /// A reviewer approved an article in review.
    ArticleApproved { article: Article, actor: User },

    /// A reviewer rejected an article in review.
    ArticleRejected { article: Article, actor: User },

    /// A reviewer commented on an article.
    CommentAdded { article: Article, actor: User },

    /// A todo item was created with an assignee.
    TodoAssigned { todo: TodoItem, actor: User },

    /// A chat message was posted to the team room.
    ChatMessagePosted { message: ChatMessage, actor: User },

    /// An admin changed a user's role. `user` carries the new role.
    RoleChanged { user: User },
}
