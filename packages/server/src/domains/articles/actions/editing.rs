//! Article creation, editing and deletion.

use tracing::info;

use crate::common::auth::{can_delete_article, can_edit_article};
use crate::common::{
    has_permission, Actor, ActorContext, ArticleId, AuthError, Capability, CoreError, Role,
};
use crate::common::utils::generate_excerpt;
use crate::domains::articles::models::{
    Article, ArticleStatus, ARTICLE_CATEGORIES, EXCERPT_MAX_LENGTH,
};
use crate::kernel::ServerDeps;

/// Fields for drafting a new article.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub category: Option<String>,
}

/// Fields for editing an article's content.
#[derive(Debug, Clone)]
pub struct UpdateArticle {
    pub title: String,
    pub body: String,
    pub category: Option<String>,
}

fn validate_content(
    title: &str,
    body: &str,
    category: Option<&String>,
) -> Result<(), CoreError> {
    if title.trim().is_empty() || body.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "titolo e contenuto sono obbligatori".to_string(),
        ));
    }
    if let Some(category) = category {
        if !ARTICLE_CATEGORIES.contains(&category.as_str()) {
            return Err(CoreError::ValidationFailed(format!(
                "categoria sconosciuta: {category}"
            )));
        }
    }
    Ok(())
}

/// Draft a new article. The excerpt is derived from the body.
pub async fn create_article(
    deps: &ServerDeps,
    actor: &ActorContext,
    input: NewArticle,
) -> Result<Article, CoreError> {
    Actor::from_context(actor)
        .can(Capability::CreateArticle)
        .check()?;
    validate_content(&input.title, &input.body, input.category.as_ref())?;

    let article = Article::new_draft(input.title, input.body, actor.user_id, input.category);
    deps.store.insert_article(&article).await?;

    info!(article_id = %article.id, author_id = %actor.user_id, "Created draft article");
    Ok(article)
}

/// Edit an article's content, regenerating the excerpt.
///
/// Gated purely by role/ownership (`can_edit_article`), never by status: a
/// verificatore may edit an article that is already in review.
pub async fn update_content(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
    input: UpdateArticle,
) -> Result<Article, CoreError> {
    let article = deps
        .store
        .find_article(article_id)
        .await?
        .ok_or(CoreError::NotFound("article"))?;

    if !can_edit_article(actor.role, actor.user_id, article.author_id) {
        return Err(AuthError::NotOwner.into());
    }
    validate_content(&input.title, &input.body, input.category.as_ref())?;

    let excerpt = generate_excerpt(&input.body, EXCERPT_MAX_LENGTH);
    let updated = deps
        .store
        .update_article_content(article_id, input.title, input.body, excerpt, input.category)
        .await
        .map_err(CoreError::from_store("article"))?;

    info!(article_id = %article_id, "Updated article content");
    Ok(updated)
}

/// Delete an article.
///
/// Admins delete anything; an author deletes their own article only while it
/// is still a draft; verificatori never delete.
pub async fn delete_article(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
) -> Result<(), CoreError> {
    let article = deps
        .store
        .find_article(article_id)
        .await?
        .ok_or(CoreError::NotFound("article"))?;

    if !can_delete_article(actor.role, actor.user_id, article.author_id) {
        return Err(AuthError::PermissionDenied(Capability::DeleteArticle.to_string()).into());
    }
    if actor.role != Role::Amministratore && article.status != ArticleStatus::Bozza {
        return Err(AuthError::PermissionDenied(
            "solo le bozze possono essere eliminate dall'autore".to_string(),
        )
        .into());
    }

    deps.store
        .delete_article(article_id)
        .await
        .map_err(CoreError::from_store("article"))?;

    info!(article_id = %article_id, "Deleted article");
    Ok(())
}

/// Fetch one article. Scrittori only see their own.
pub async fn get_article(
    deps: &ServerDeps,
    actor: &ActorContext,
    article_id: ArticleId,
) -> Result<Article, CoreError> {
    let article = deps
        .store
        .find_article(article_id)
        .await?
        .ok_or(CoreError::NotFound("article"))?;

    if article.author_id != actor.user_id
        && !has_permission(actor.role, Capability::ViewAllArticles)
    {
        return Err(AuthError::PermissionDenied(Capability::ViewAllArticles.to_string()).into());
    }
    Ok(article)
}

/// List articles, newest first. Scrittori see only their own; roles with
/// `view_all_articles` see everything.
pub async fn list_articles(
    deps: &ServerDeps,
    actor: &ActorContext,
) -> Result<Vec<Article>, CoreError> {
    let articles = if has_permission(actor.role, Capability::ViewAllArticles) {
        deps.store.list_articles().await?
    } else {
        deps.store.list_articles_by_author(actor.user_id).await?
    };
    Ok(articles)
}
