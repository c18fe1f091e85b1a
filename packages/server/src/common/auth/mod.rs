/// Authorization module for the giornalino editorial platform
///
/// Provides a fluent API for authorization checks in action code:
///
/// ```rust
/// use server_core::common::auth::{Actor, Capability};
/// # use server_core::common::{Role, UserId};
/// # let actor_id = UserId::new();
///
/// // In an action:
/// Actor::new(actor_id, Role::Verificatore)
///     .can(Capability::ApproveArticle)
///     .check()?;
/// # Ok::<(), server_core::common::auth::AuthError>(())
/// ```
///
/// This keeps authorization logic in the action layer where it belongs, as
/// the single authority for role checks: call sites never compare role
/// strings themselves.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, ActorContext, CapabilityCheck};
pub use capability::{can_delete_article, can_edit_article, has_permission, Capability};
pub use errors::AuthError;
