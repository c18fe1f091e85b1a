//! Comments domain - append-only review notes on articles.

pub mod actions;
pub mod models;

pub use models::Comment;
