//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{ArticleId, UserId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let user_id: UserId = UserId::new();
//! let article_id: ArticleId = ArticleId::new();
//!
//! // This would be a compile error:
//! // let wrong: ArticleId = user_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (newsroom members).
pub struct User;

/// Marker type for Article entities.
pub struct Article;

/// Marker type for Comment entities (review comments on articles).
pub struct Comment;

/// Marker type for TodoItem entities (newsroom task board).
pub struct Todo;

/// Marker type for ChatMessage entities (team chat).
pub struct ChatMessage;

/// Marker type for Notification entities.
pub struct Notification;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Article entities.
pub type ArticleId = Id<Article>;

/// Typed ID for Comment entities.
pub type CommentId = Id<Comment>;

/// Typed ID for TodoItem entities.
pub type TodoId = Id<Todo>;

/// Typed ID for ChatMessage entities.
pub type ChatMessageId = Id<ChatMessage>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;
