//! Users domain - newsroom member profiles and roles.

pub mod actions;
pub mod models;

pub use models::User;
