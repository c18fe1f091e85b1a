//! Chat domain - the single team chat room.

pub mod actions;
pub mod models;

pub use models::ChatMessage;
