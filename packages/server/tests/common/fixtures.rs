//! Test fixtures for creating test data.
//!
//! These fixtures use the model constructors and domain actions directly.

use server_core::common::{ActorContext, Role};
use server_core::domains::articles::actions::{create_article, NewArticle};
use server_core::domains::articles::models::Article;
use server_core::domains::users::models::User;
use server_core::kernel::ServerDeps;

/// Insert a newsroom member with the given role, returning their actor context.
pub async fn create_member(deps: &ServerDeps, first_name: &str, role: Role) -> ActorContext {
    let user = User::with_role(
        format!("{}@scuola.it", first_name.to_lowercase()),
        first_name.to_string(),
        "Rossi".to_string(),
        role,
    );
    deps.store
        .insert_user(&user)
        .await
        .expect("failed to insert test user");
    ActorContext::new(user.id, role)
}

/// Draft a test article through the create action.
pub async fn create_test_draft(
    deps: &ServerDeps,
    author: &ActorContext,
    title: &str,
) -> Article {
    create_article(
        deps,
        author,
        NewArticle {
            title: title.to_string(),
            body: "<p>Hello world</p>".to_string(),
            category: None,
        },
    )
    .await
    .expect("failed to create test draft")
}
