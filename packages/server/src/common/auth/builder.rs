use super::{has_permission, AuthError, Capability};
use crate::common::entity_ids::UserId;
use crate::common::types::Role;

/// The authenticated actor of a core operation.
///
/// Built by the caller from whatever session/auth layer it runs behind and
/// passed explicitly into every operation. Core code never reads the current
/// user from ambient or global state.
#[derive(Debug, Clone, Copy)]
pub struct ActorContext {
    pub user_id: UserId,
    pub role: Role,
}

impl ActorContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// # use server_core::common::auth::{Actor, Capability};
/// # use server_core::common::{Role, UserId};
/// # let actor_id = UserId::new();
/// Actor::new(actor_id, Role::Amministratore)
///     .can(Capability::ManageUsers)
///     .check()?;
/// # Ok::<(), server_core::common::auth::AuthError>(())
/// ```
pub struct Actor {
    actor_id: UserId,
    role: Role,
}

impl Actor {
    /// Create a new actor for authorization checks
    pub fn new(actor_id: UserId, role: Role) -> Self {
        Self { actor_id, role }
    }

    /// Build an actor from an [`ActorContext`]
    pub fn from_context(ctx: &ActorContext) -> Self {
        Self::new(ctx.user_id, ctx.role)
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityCheck {
        CapabilityCheck {
            actor_id: self.actor_id,
            role: self.role,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityCheck {
    #[allow(dead_code)]
    actor_id: UserId,
    role: Role,
    capability: Capability,
}

impl CapabilityCheck {
    /// Perform the authorization check against the static allow-list.
    ///
    /// Pure table lookup: raised before any mutation is attempted.
    pub fn check(self) -> Result<(), AuthError> {
        if has_permission(self.role, self.capability) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(self.capability.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_check() {
        let actor_id = UserId::new();
        let result = Actor::new(actor_id, Role::Amministratore)
            .can(Capability::ManageUsers)
            .check();

        assert!(result.is_ok());
    }

    #[test]
    fn test_writer_rejected_for_admin_capability() {
        let actor_id = UserId::new();
        let result = Actor::new(actor_id, Role::Scrittore)
            .can(Capability::ManageUsers)
            .check();

        assert!(matches!(result, Err(AuthError::PermissionDenied(_))));
    }

    #[test]
    fn test_check_from_context() {
        let ctx = ActorContext::new(UserId::new(), Role::Verificatore);
        let result = Actor::from_context(&ctx)
            .can(Capability::ApproveArticle)
            .check();

        assert!(result.is_ok());
    }
}
