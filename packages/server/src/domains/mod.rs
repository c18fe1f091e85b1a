// Business domains
pub mod articles;
pub mod chat;
pub mod comments;
pub mod notifications;
pub mod todos;
pub mod users;
