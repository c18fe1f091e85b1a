// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "submit for review") lives in domain actions that use
// these traits.
//
// Naming convention: Base* for trait names (e.g., BaseStore, BaseDeliveryService)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{
    ArticleId, ChatMessageId, CommentId, DeliveryError, NotificationId, Role, StoreError, TodoId,
    UserId,
};
use crate::domains::articles::models::{Article, ArticleStatus};
use crate::domains::chat::models::ChatMessage;
use crate::domains::comments::models::Comment;
use crate::domains::notifications::models::Notification;
use crate::domains::todos::models::TodoItem;
use crate::domains::users::models::User;

// =============================================================================
// Data Store Trait (Infrastructure - generic CRUD + filtered queries)
// =============================================================================

/// The external data store, seen as a generic record store.
///
/// The store is the single source of truth and the sole arbiter of
/// conflicting concurrent writes (last write wins). Every call is an await
/// point; callers must not assume ordering between independently issued
/// writes to different entities.
///
/// Implementations publish a [`ChangeEvent`](crate::kernel::ChangeEvent) to
/// the change feed after each successful mutation.
#[async_trait]
pub trait BaseStore: Send + Sync {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// All users, ordered by first name.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Users whose role is in the given set (e.g. every reviewer and admin).
    async fn list_users_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, StoreError>;

    /// Users active since the given instant (`last_seen_at >= since`).
    async fn list_users_seen_since(&self, since: DateTime<Utc>)
        -> Result<Vec<User>, StoreError>;

    async fn update_user_role(&self, id: UserId, role: Role) -> Result<User, StoreError>;

    async fn touch_user_last_seen(
        &self,
        id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Delete a user and cascade to owned entities (articles with their
    /// comments, todos created, chat messages, notifications; dangling todo
    /// assignments are cleared).
    async fn delete_user(&self, id: UserId) -> Result<(), StoreError>;

    // -------------------------------------------------------------------------
    // Articles
    // -------------------------------------------------------------------------

    async fn insert_article(&self, article: &Article) -> Result<(), StoreError>;

    async fn find_article(&self, id: ArticleId) -> Result<Option<Article>, StoreError>;

    /// All articles, newest first.
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// Articles by one author, newest first.
    async fn list_articles_by_author(&self, author_id: UserId)
        -> Result<Vec<Article>, StoreError>;

    /// Replace title/body/excerpt/category, stamping `updated_at`.
    async fn update_article_content(
        &self,
        id: ArticleId,
        title: String,
        body: String,
        excerpt: String,
        category: Option<String>,
    ) -> Result<Article, StoreError>;

    /// Set the workflow status, stamping `updated_at`. Last write wins.
    async fn update_article_status(
        &self,
        id: ArticleId,
        status: ArticleStatus,
    ) -> Result<Article, StoreError>;

    /// Delete an article and its comments.
    async fn delete_article(&self, id: ArticleId) -> Result<(), StoreError>;

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    async fn insert_comment(&self, comment: &Comment) -> Result<(), StoreError>;

    /// Comments for one article, oldest first.
    async fn list_comments_by_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Comment>, StoreError>;

    async fn delete_comment(&self, id: CommentId) -> Result<(), StoreError>;

    // -------------------------------------------------------------------------
    // Todos
    // -------------------------------------------------------------------------

    async fn insert_todo(&self, todo: &TodoItem) -> Result<(), StoreError>;

    async fn find_todo(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError>;

    /// All todo items, newest first.
    async fn list_todos(&self) -> Result<Vec<TodoItem>, StoreError>;

    async fn set_todo_completed(
        &self,
        id: TodoId,
        completed: bool,
    ) -> Result<TodoItem, StoreError>;

    async fn delete_todo(&self, id: TodoId) -> Result<(), StoreError>;

    // -------------------------------------------------------------------------
    // Chat messages
    // -------------------------------------------------------------------------

    async fn insert_chat_message(&self, message: &ChatMessage) -> Result<(), StoreError>;

    /// Full room history, oldest first.
    async fn list_chat_messages(&self) -> Result<Vec<ChatMessage>, StoreError>;

    /// Update a message body, matching on BOTH id and author. A request with
    /// a mismatched author fails with [`StoreError::RowNotFound`] rather than
    /// silently succeeding. Stamps `edited_at`.
    async fn update_chat_message(
        &self,
        id: ChatMessageId,
        author_id: UserId,
        body: String,
    ) -> Result<ChatMessage, StoreError>;

    /// Delete a message, matching on BOTH id and author (same contract as
    /// [`update_chat_message`](Self::update_chat_message)).
    async fn delete_chat_message(
        &self,
        id: ChatMessageId,
        author_id: UserId,
    ) -> Result<(), StoreError>;

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    async fn insert_notification(&self, notification: &Notification) -> Result<(), StoreError>;

    /// Latest notifications for a recipient, newest first, at most `limit`.
    async fn list_notifications(
        &self,
        recipient_id: UserId,
        limit: usize,
    ) -> Result<Vec<Notification>, StoreError>;

    async fn count_unread_notifications(&self, recipient_id: UserId)
        -> Result<u64, StoreError>;

    /// Mark one notification read, scoped to its recipient.
    async fn mark_notification_read(
        &self,
        id: NotificationId,
        recipient_id: UserId,
    ) -> Result<(), StoreError>;

    /// Mark every unread notification of a recipient read. Returns the number
    /// of rows affected; calling it again is a no-op returning 0.
    async fn mark_all_notifications_read(
        &self,
        recipient_id: UserId,
    ) -> Result<u64, StoreError>;

    /// Delete one notification, scoped to its recipient.
    async fn delete_notification(
        &self,
        id: NotificationId,
        recipient_id: UserId,
    ) -> Result<(), StoreError>;
}

// =============================================================================
// Notification Delivery Trait (Infrastructure)
// =============================================================================

/// The external notification sink (toast, device push, or a no-op).
///
/// Best-effort and fire-and-forget: a failed delivery never rolls back the
/// notification record, and the engine logs the error instead of surfacing it.
#[async_trait]
pub trait BaseDeliveryService: Send + Sync {
    /// Push one notification towards the recipient's device.
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;
}
