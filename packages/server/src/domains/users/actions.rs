//! User management actions.

use chrono::{Duration, Utc};
use tracing::info;

use crate::common::{Actor, ActorContext, Capability, CoreError, Role, UserId};
use crate::domains::notifications::{notify, DomainEvent};
use crate::domains::users::models::User;
use crate::kernel::ServerDeps;

/// Fields for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Create a profile for a freshly signed-up user.
///
/// Triggered by the external auth layer after sign-up; there is no actor.
/// The role always starts as scrittore.
pub async fn register_user(deps: &ServerDeps, input: RegisterUser) -> Result<User, CoreError> {
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "nome e cognome sono obbligatori".to_string(),
        ));
    }
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(CoreError::ValidationFailed(
            "indirizzo email non valido".to_string(),
        ));
    }

    let user = User::new(
        input.email.trim().to_string(),
        input.first_name.trim().to_string(),
        input.last_name.trim().to_string(),
    );
    deps.store.insert_user(&user).await?;

    info!(user_id = %user.id, role = %user.role, "Registered user");
    Ok(user)
}

/// Change a user's role. Admin only; the affected user gets a `sistema`
/// notification.
pub async fn update_role(
    deps: &ServerDeps,
    actor: &ActorContext,
    target_id: UserId,
    new_role: Role,
) -> Result<User, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageUsers)
        .check()?;

    let user = deps
        .store
        .update_user_role(target_id, new_role)
        .await
        .map_err(CoreError::from_store("user"))?;

    info!(user_id = %user.id, role = %new_role, "Updated user role");

    notify(deps, &DomainEvent::RoleChanged { user: user.clone() }).await?;
    Ok(user)
}

/// Delete a user. Admin only; the store cascades to owned entities.
pub async fn delete_user(
    deps: &ServerDeps,
    actor: &ActorContext,
    target_id: UserId,
) -> Result<(), CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageUsers)
        .check()?;

    deps.store
        .delete_user(target_id)
        .await
        .map_err(CoreError::from_store("user"))?;

    info!(user_id = %target_id, "Deleted user");
    Ok(())
}

/// Every profile, ordered by first name.
pub async fn list_users(deps: &ServerDeps) -> Result<Vec<User>, CoreError> {
    let users = deps.store.list_users().await?;
    Ok(users)
}

/// Users active within the last `window_minutes`.
pub async fn list_online_users(
    deps: &ServerDeps,
    window_minutes: i64,
) -> Result<Vec<User>, CoreError> {
    let since = Utc::now() - Duration::minutes(window_minutes);
    let users = deps.store.list_users_seen_since(since).await?;
    Ok(users)
}

/// Record activity for the actor, feeding the "online now" list.
pub async fn touch_last_seen(deps: &ServerDeps, actor: &ActorContext) -> Result<(), CoreError> {
    deps.store
        .touch_user_last_seen(actor.user_id, Utc::now())
        .await
        .map_err(CoreError::from_store("user"))
}
