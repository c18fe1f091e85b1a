//! Notifications domain - the event fan-out engine and the recipient feed.

pub mod actions;
pub mod engine;
pub mod events;
pub mod models;

pub use engine::notify;
pub use events::DomainEvent;
pub use models::{Notification, NotificationKind};
