//! In-memory reference implementation of [`BaseStore`].
//!
//! Backs the test suite and the seed binary. Rows live in per-entity maps
//! behind a single `RwLock`; after every successful mutation the store
//! publishes a [`ChangeEvent`] on the change feed, mirroring what a
//! realtime-enabled database would emit.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::common::{
    ArticleId, ChatMessageId, CommentId, NotificationId, Role, StoreError, TodoId, UserId,
};
use crate::domains::articles::models::{Article, ArticleStatus};
use crate::domains::chat::models::ChatMessage;
use crate::domains::comments::models::Comment;
use crate::domains::notifications::models::Notification;
use crate::domains::todos::models::TodoItem;
use crate::domains::users::models::User;
use crate::kernel::stream_hub::{notifications_topic, ChangeEvent, ChangeFeed};
use crate::kernel::traits::BaseStore;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    articles: HashMap<ArticleId, Article>,
    comments: HashMap<CommentId, Comment>,
    todos: HashMap<TodoId, TodoItem>,
    chat_messages: HashMap<ChatMessageId, ChatMessage>,
    notifications: HashMap<NotificationId, Notification>,
}

/// In-memory store with change-feed publication.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    feed: ChangeFeed,
}

impl MemoryStore {
    pub fn new(feed: ChangeFeed) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            feed,
        }
    }
}

fn row<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_default()
}

#[async_trait]
impl BaseStore for MemoryStore {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        Ok(users)
    }

    async fn list_users_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables
            .users
            .values()
            .filter(|u| roles.contains(&u.role))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        Ok(users)
    }

    async fn list_users_seen_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables
            .users
            .values()
            .filter(|u| u.last_seen_at.is_some_and(|seen| seen >= since))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        Ok(users)
    }

    async fn update_user_role(&self, id: UserId, role: Role) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or(StoreError::RowNotFound)?;
        user.role = role;
        Ok(user.clone())
    }

    async fn touch_user_last_seen(
        &self,
        id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or(StoreError::RowNotFound)?;
        user.last_seen_at = Some(at);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id).ok_or(StoreError::RowNotFound)?;

        // Cascade: articles authored by the user (with their comments)
        let owned_articles: Vec<ArticleId> = tables
            .articles
            .values()
            .filter(|a| a.author_id == id)
            .map(|a| a.id)
            .collect();
        let mut deleted_articles = Vec::new();
        for article_id in owned_articles {
            if let Some(article) = tables.articles.remove(&article_id) {
                deleted_articles.push(article);
            }
            tables.comments.retain(|_, c| c.article_id != article_id);
        }

        // Cascade: comments the user wrote on other articles
        tables.comments.retain(|_, c| c.author_id != id);

        // Cascade: todos the user created; clear dangling assignments
        let mut deleted_todos = Vec::new();
        tables.todos.retain(|_, t| {
            if t.created_by == id {
                deleted_todos.push(t.clone());
                false
            } else {
                true
            }
        });
        for todo in tables.todos.values_mut() {
            if todo.assigned_to == Some(id) {
                todo.assigned_to = None;
            }
        }

        // Cascade: chat messages and notifications
        let mut deleted_messages = Vec::new();
        tables.chat_messages.retain(|_, m| {
            if m.author_id == id {
                deleted_messages.push(m.clone());
                false
            } else {
                true
            }
        });
        tables.notifications.retain(|_, n| n.recipient_id != id);
        drop(tables);

        for article in deleted_articles {
            self.feed
                .publish("articles", ChangeEvent::delete("articles", row(&article)))
                .await;
        }
        for todo in deleted_todos {
            self.feed
                .publish("todos", ChangeEvent::delete("todos", row(&todo)))
                .await;
        }
        for message in deleted_messages {
            self.feed
                .publish(
                    "chat_messages",
                    ChangeEvent::delete("chat_messages", row(&message)),
                )
                .await;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Articles
    // -------------------------------------------------------------------------

    async fn insert_article(&self, article: &Article) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.articles.insert(article.id, article.clone());
        drop(tables);

        self.feed
            .publish("articles", ChangeEvent::insert("articles", row(article)))
            .await;
        Ok(())
    }

    async fn find_article(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.articles.get(&id).cloned())
    }

    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let tables = self.tables.read().await;
        let mut articles: Vec<Article> = tables.articles.values().cloned().collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn list_articles_by_author(
        &self,
        author_id: UserId,
    ) -> Result<Vec<Article>, StoreError> {
        let tables = self.tables.read().await;
        let mut articles: Vec<Article> = tables
            .articles
            .values()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn update_article_content(
        &self,
        id: ArticleId,
        title: String,
        body: String,
        excerpt: String,
        category: Option<String>,
    ) -> Result<Article, StoreError> {
        let mut tables = self.tables.write().await;
        let article = tables.articles.get_mut(&id).ok_or(StoreError::RowNotFound)?;
        article.title = title;
        article.body = body;
        article.excerpt = excerpt;
        article.category = category;
        article.updated_at = Utc::now();
        let updated = article.clone();
        drop(tables);

        self.feed
            .publish("articles", ChangeEvent::update("articles", row(&updated)))
            .await;
        Ok(updated)
    }

    async fn update_article_status(
        &self,
        id: ArticleId,
        status: ArticleStatus,
    ) -> Result<Article, StoreError> {
        let mut tables = self.tables.write().await;
        let article = tables.articles.get_mut(&id).ok_or(StoreError::RowNotFound)?;
        article.status = status;
        article.updated_at = Utc::now();
        let updated = article.clone();
        drop(tables);

        self.feed
            .publish("articles", ChangeEvent::update("articles", row(&updated)))
            .await;
        Ok(updated)
    }

    async fn delete_article(&self, id: ArticleId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let article = tables.articles.remove(&id).ok_or(StoreError::RowNotFound)?;
        tables.comments.retain(|_, c| c.article_id != id);
        drop(tables);

        self.feed
            .publish("articles", ChangeEvent::delete("articles", row(&article)))
            .await;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    async fn insert_comment(&self, comment: &Comment) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn list_comments_by_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Comment>, StoreError> {
        let tables = self.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.comments.remove(&id).ok_or(StoreError::RowNotFound)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Todos
    // -------------------------------------------------------------------------

    async fn insert_todo(&self, todo: &TodoItem) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.todos.insert(todo.id, todo.clone());
        drop(tables);

        self.feed
            .publish("todos", ChangeEvent::insert("todos", row(todo)))
            .await;
        Ok(())
    }

    async fn find_todo(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.todos.get(&id).cloned())
    }

    async fn list_todos(&self) -> Result<Vec<TodoItem>, StoreError> {
        let tables = self.tables.read().await;
        let mut todos: Vec<TodoItem> = tables.todos.values().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn set_todo_completed(
        &self,
        id: TodoId,
        completed: bool,
    ) -> Result<TodoItem, StoreError> {
        let mut tables = self.tables.write().await;
        let todo = tables.todos.get_mut(&id).ok_or(StoreError::RowNotFound)?;
        todo.completed = completed;
        todo.updated_at = Utc::now();
        let updated = todo.clone();
        drop(tables);

        self.feed
            .publish("todos", ChangeEvent::update("todos", row(&updated)))
            .await;
        Ok(updated)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let todo = tables.todos.remove(&id).ok_or(StoreError::RowNotFound)?;
        drop(tables);

        self.feed
            .publish("todos", ChangeEvent::delete("todos", row(&todo)))
            .await;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Chat messages
    // -------------------------------------------------------------------------

    async fn insert_chat_message(&self, message: &ChatMessage) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.chat_messages.insert(message.id, message.clone());
        drop(tables);

        self.feed
            .publish(
                "chat_messages",
                ChangeEvent::insert("chat_messages", row(message)),
            )
            .await;
        Ok(())
    }

    async fn list_chat_messages(&self) -> Result<Vec<ChatMessage>, StoreError> {
        let tables = self.tables.read().await;
        let mut messages: Vec<ChatMessage> = tables.chat_messages.values().cloned().collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    async fn update_chat_message(
        &self,
        id: ChatMessageId,
        author_id: UserId,
        body: String,
    ) -> Result<ChatMessage, StoreError> {
        let mut tables = self.tables.write().await;
        // Both id and author must match; a mismatched author sees "not found",
        // exactly as a filtered update matching zero rows would.
        let message = tables
            .chat_messages
            .get_mut(&id)
            .filter(|m| m.author_id == author_id)
            .ok_or(StoreError::RowNotFound)?;
        message.body = body;
        message.edited_at = Some(Utc::now());
        let updated = message.clone();
        drop(tables);

        self.feed
            .publish(
                "chat_messages",
                ChangeEvent::update("chat_messages", row(&updated)),
            )
            .await;
        Ok(updated)
    }

    async fn delete_chat_message(
        &self,
        id: ChatMessageId,
        author_id: UserId,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let matches = tables
            .chat_messages
            .get(&id)
            .is_some_and(|m| m.author_id == author_id);
        if !matches {
            return Err(StoreError::RowNotFound);
        }
        let message = tables
            .chat_messages
            .remove(&id)
            .ok_or(StoreError::RowNotFound)?;
        drop(tables);

        self.feed
            .publish(
                "chat_messages",
                ChangeEvent::delete("chat_messages", row(&message)),
            )
            .await;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    async fn insert_notification(&self, notification: &Notification) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .notifications
            .insert(notification.id, notification.clone());
        drop(tables);

        self.feed
            .publish(
                &notifications_topic(notification.recipient_id),
                ChangeEvent::insert("notifications", row(notification)),
            )
            .await;
        Ok(())
    }

    async fn list_notifications(
        &self,
        recipient_id: UserId,
        limit: usize,
    ) -> Result<Vec<Notification>, StoreError> {
        let tables = self.tables.read().await;
        let mut notifications: Vec<Notification> = tables
            .notifications
            .values()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications.truncate(limit);
        Ok(notifications)
    }

    async fn count_unread_notifications(
        &self,
        recipient_id: UserId,
    ) -> Result<u64, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .notifications
            .values()
            .filter(|n| n.recipient_id == recipient_id && !n.read)
            .count() as u64)
    }

    async fn mark_notification_read(
        &self,
        id: NotificationId,
        recipient_id: UserId,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let notification = tables
            .notifications
            .get_mut(&id)
            .filter(|n| n.recipient_id == recipient_id)
            .ok_or(StoreError::RowNotFound)?;
        notification.read = true;
        let updated = notification.clone();
        drop(tables);

        self.feed
            .publish(
                &notifications_topic(recipient_id),
                ChangeEvent::update("notifications", row(&updated)),
            )
            .await;
        Ok(())
    }

    async fn mark_all_notifications_read(
        &self,
        recipient_id: UserId,
    ) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let mut updated_rows = Vec::new();
        for notification in tables
            .notifications
            .values_mut()
            .filter(|n| n.recipient_id == recipient_id && !n.read)
        {
            notification.read = true;
            updated_rows.push(notification.clone());
        }
        drop(tables);

        for notification in &updated_rows {
            self.feed
                .publish(
                    &notifications_topic(recipient_id),
                    ChangeEvent::update("notifications", row(notification)),
                )
                .await;
        }
        Ok(updated_rows.len() as u64)
    }

    async fn delete_notification(
        &self,
        id: NotificationId,
        recipient_id: UserId,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let matches = tables
            .notifications
            .get(&id)
            .is_some_and(|n| n.recipient_id == recipient_id);
        if !matches {
            return Err(StoreError::RowNotFound);
        }
        tables.notifications.remove(&id);
        Ok(())
    }
}
