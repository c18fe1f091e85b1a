// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod types;
pub mod utils;

pub use auth::{has_permission, Actor, ActorContext, AuthError, Capability};
pub use entity_ids::*;
pub use errors::{CoreError, DeliveryError, StoreError};
pub use id::{Id, V4, V7};
pub use types::*;
