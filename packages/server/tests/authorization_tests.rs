//! Authorization integration tests: the permission table and the ownership
//! predicates as enforced by the domain actions.

mod common;

use common::{create_member, create_test_draft, harness};
use server_core::common::{AuthError, CoreError, Role};
use server_core::domains::articles::actions::{
    approve, dashboard_stats, delete_article, get_article, list_articles, reject,
    submit_for_review, update_content, UpdateArticle,
};
use server_core::domains::notifications::actions::list_notifications;
use server_core::domains::notifications::models::NotificationKind;
use server_core::domains::todos::actions::list_todos;
use server_core::domains::users::actions::{register_user, update_role, RegisterUser};

#[tokio::test]
async fn test_writer_cannot_delete_someone_elses_article() {
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let other_writer = create_member(&h.deps, "Bruno", Role::Scrittore).await;
    let article = create_test_draft(&h.deps, &author, "Il mio articolo").await;

    let result = delete_article(&h.deps, &other_writer, article.id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));

    // The article is still there
    assert!(h
        .deps
        .store
        .find_article(article.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_admin_deletes_any_article_regardless_of_status() {
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let admin = create_member(&h.deps, "Carla", Role::Amministratore).await;
    let article = create_test_draft(&h.deps, &author, "Da eliminare").await;
    submit_for_review(&h.deps, &author, article.id).await.unwrap();

    delete_article(&h.deps, &admin, article.id).await.unwrap();
    assert!(h
        .deps
        .store
        .find_article(article.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_writer_deletes_own_draft_but_not_once_submitted() {
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;

    let draft = create_test_draft(&h.deps, &author, "Bozza").await;
    delete_article(&h.deps, &author, draft.id).await.unwrap();

    let submitted = create_test_draft(&h.deps, &author, "Inviato").await;
    submit_for_review(&h.deps, &author, submitted.id)
        .await
        .unwrap();
    let result = delete_article(&h.deps, &author, submitted.id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
}

#[tokio::test]
async fn test_reviewer_may_reject_but_not_delete() {
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &author, "In revisione").await;
    submit_for_review(&h.deps, &author, article.id).await.unwrap();

    let result = delete_article(&h.deps, &reviewer, article.id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
}

#[tokio::test]
async fn test_writer_cannot_approve() {
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let article = create_test_draft(&h.deps, &author, "Test").await;
    submit_for_review(&h.deps, &author, article.id).await.unwrap();

    let result = approve(&h.deps, &author, article.id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));

    // Raised before any mutation: status unchanged
    let stored = h
        .deps
        .store
        .find_article(article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status.to_string(), "in_revisione");
}

#[tokio::test]
async fn test_writers_see_only_their_own_articles() {
    let h = harness();
    let anna = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let bruno = create_member(&h.deps, "Bruno", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Carla", Role::Verificatore).await;

    create_test_draft(&h.deps, &anna, "Di Anna").await;
    create_test_draft(&h.deps, &bruno, "Di Bruno").await;

    let annas = list_articles(&h.deps, &anna).await.unwrap();
    assert_eq!(annas.len(), 1);
    assert_eq!(annas[0].title, "Di Anna");

    let all = list_articles(&h.deps, &reviewer).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_todo_board_hidden_from_writers() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;

    assert!(matches!(
        list_todos(&h.deps, &writer).await,
        Err(CoreError::PermissionDenied(_))
    ));
    assert!(list_todos(&h.deps, &reviewer).await.is_ok());
}

#[tokio::test]
async fn test_reviewer_edits_in_review_article_of_someone_else() {
    // The edit gate is role/ownership only, never status: this is the
    // documented contract even for articles already in review.
    let h = harness();
    let author = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let other_writer = create_member(&h.deps, "Dario", Role::Scrittore).await;
    let article = create_test_draft(&h.deps, &author, "Originale").await;
    submit_for_review(&h.deps, &author, article.id).await.unwrap();

    let edited = update_content(
        &h.deps,
        &reviewer,
        article.id,
        UpdateArticle {
            title: "Titolo corretto".to_string(),
            body: "<p>Testo rivisto</p>".to_string(),
            category: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(edited.title, "Titolo corretto");

    // A different writer still cannot touch it
    let result = update_content(
        &h.deps,
        &other_writer,
        article.id,
        UpdateArticle {
            title: "Vandalo".to_string(),
            body: "x".to_string(),
            category: None,
        },
    )
    .await;
    assert!(matches!(
        result,
        Err(CoreError::PermissionDenied(AuthError::NotOwner))
    ));
}

#[tokio::test]
async fn test_single_article_visibility_follows_view_all() {
    let h = harness();
    let anna = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let bruno = create_member(&h.deps, "Bruno", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Carla", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &anna, "Riservato").await;

    assert!(get_article(&h.deps, &anna, article.id).await.is_ok());
    assert!(get_article(&h.deps, &reviewer, article.id).await.is_ok());
    assert!(matches!(
        get_article(&h.deps, &bruno, article.id).await,
        Err(CoreError::PermissionDenied(_))
    ));
}

#[tokio::test]
async fn test_dashboard_stats_are_admin_only() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let admin = create_member(&h.deps, "Carla", Role::Amministratore).await;

    let in_review = create_test_draft(&h.deps, &writer, "In corso").await;
    submit_for_review(&h.deps, &writer, in_review.id).await.unwrap();
    let rejected = create_test_draft(&h.deps, &writer, "Bocciato").await;
    submit_for_review(&h.deps, &writer, rejected.id).await.unwrap();
    reject(&h.deps, &reviewer, rejected.id).await.unwrap();
    create_test_draft(&h.deps, &admin, "Dell'admin").await;

    assert!(matches!(
        dashboard_stats(&h.deps, &reviewer).await,
        Err(CoreError::PermissionDenied(_))
    ));

    let stats = dashboard_stats(&h.deps, &admin).await.unwrap();
    assert_eq!(stats.total_articles, 3);
    assert_eq!(stats.in_review, 1);
    assert_eq!(stats.to_review, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.approved, 0);
    assert_eq!(stats.my_articles, 1);
}

#[tokio::test]
async fn test_registration_defaults_to_scrittore() {
    let h = harness();
    let user = register_user(
        &h.deps,
        RegisterUser {
            email: "elena.ferri@scuola.it".to_string(),
            first_name: "Elena".to_string(),
            last_name: "Ferri".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(user.role, Role::Scrittore);
}

#[tokio::test]
async fn test_registration_validates_fields() {
    let h = harness();
    let result = register_user(
        &h.deps,
        RegisterUser {
            email: "not-an-email".to_string(),
            first_name: "Elena".to_string(),
            last_name: "Ferri".to_string(),
        },
    )
    .await;
    assert!(matches!(result, Err(CoreError::ValidationFailed(_))));
}

#[tokio::test]
async fn test_role_change_is_admin_only_and_notifies_the_user() {
    let h = harness();
    let admin = create_member(&h.deps, "Carla", Role::Amministratore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;

    // Not even a reviewer may manage users
    assert!(matches!(
        update_role(&h.deps, &reviewer, writer.user_id, Role::Verificatore).await,
        Err(CoreError::PermissionDenied(_))
    ));

    let promoted = update_role(&h.deps, &admin, writer.user_id, Role::Verificatore)
        .await
        .unwrap();
    assert_eq!(promoted.role, Role::Verificatore);

    let inbox = list_notifications(&h.deps, &writer).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, NotificationKind::Sistema);
    assert_eq!(inbox[0].title, "Ruolo aggiornato");
    assert_eq!(
        inbox[0].message,
        "Il tuo ruolo è stato aggiornato a: Verificatore"
    );
}
