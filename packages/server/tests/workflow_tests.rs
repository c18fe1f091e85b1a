//! End-to-end editorial workflow tests: draft → review → approval/rejection,
//! with the notification fan-out each transition produces.

mod common;

use common::{create_member, create_test_draft, harness};
use server_core::common::{CoreError, Role};
use server_core::domains::articles::actions::{
    approve, create_article, reject, submit_for_review, update_content, NewArticle, UpdateArticle,
};
use server_core::domains::articles::models::ArticleStatus;
use server_core::domains::notifications::actions::list_notifications;
use server_core::domains::notifications::models::NotificationKind;

#[tokio::test]
async fn test_submission_notifies_every_reviewer_except_the_author() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer_a = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let reviewer_b = create_member(&h.deps, "Carla", Role::Verificatore).await;
    let admin = create_member(&h.deps, "Dario", Role::Amministratore).await;

    let article = create_article(
        &h.deps,
        &writer,
        NewArticle {
            title: "Test".to_string(),
            body: "<p>Hello world</p>".to_string(),
            category: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(article.status, ArticleStatus::Bozza);
    assert_eq!(article.excerpt, "Hello world");

    let submitted = submit_for_review(&h.deps, &writer, article.id).await.unwrap();
    assert_eq!(submitted.status, ArticleStatus::InRevisione);

    // Exactly one nuovo_articolo per reviewer/admin, referencing the article
    for reviewer in [&reviewer_a, &reviewer_b, &admin] {
        let inbox = list_notifications(&h.deps, reviewer).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, NotificationKind::NuovoArticolo);
        assert_eq!(inbox[0].title, "Nuovo articolo da revisionare");
        assert_eq!(
            inbox[0].message,
            "Anna Rossi ha inviato un articolo per la revisione"
        );
        assert_eq!(inbox[0].reference_id, Some(article.id.into_uuid()));
        assert!(!inbox[0].read);
    }

    // The submitting author is excluded from the fan-out
    let own_inbox = list_notifications(&h.deps, &writer).await.unwrap();
    assert!(own_inbox.is_empty());

    // Three independent records, three deliveries
    assert_eq!(h.delivery.delivery_count(), 3);
    assert!(h
        .delivery
        .was_delivered_with_title("Nuovo articolo da revisionare"));
}

#[tokio::test]
async fn test_approval_notifies_only_the_author() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &writer, "Da approvare").await;
    submit_for_review(&h.deps, &writer, article.id).await.unwrap();

    let approved = approve(&h.deps, &reviewer, article.id).await.unwrap();
    assert_eq!(approved.status, ArticleStatus::Approvato);

    let author_inbox = list_notifications(&h.deps, &writer).await.unwrap();
    let approvals: Vec<_> = author_inbox
        .iter()
        .filter(|n| n.kind == NotificationKind::ArticoloApprovato)
        .collect();
    assert_eq!(approvals.len(), 1);
    assert_eq!(approvals[0].title, "Articolo approvato!");
    assert_eq!(
        approvals[0].message,
        "Il tuo articolo \"Da approvare\" è stato approvato"
    );
    assert_eq!(approvals[0].reference_id, Some(article.id.into_uuid()));

    // The approving reviewer gets nothing from their own decision
    let reviewer_inbox = list_notifications(&h.deps, &reviewer).await.unwrap();
    assert!(reviewer_inbox
        .iter()
        .all(|n| n.kind != NotificationKind::ArticoloApprovato));
}

#[tokio::test]
async fn test_rejection_and_resubmission() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &writer, "Bocciato").await;
    submit_for_review(&h.deps, &writer, article.id).await.unwrap();

    let rejected = reject(&h.deps, &reviewer, article.id).await.unwrap();
    assert_eq!(rejected.status, ArticleStatus::Rifiutato);

    let author_inbox = list_notifications(&h.deps, &writer).await.unwrap();
    assert!(author_inbox
        .iter()
        .any(|n| n.kind == NotificationKind::ArticoloRifiutato
            && n.message == "Il tuo articolo \"Bocciato\" è stato rifiutato"));

    // Resubmission re-enters review with the "updated" wording
    let resubmitted = submit_for_review(&h.deps, &writer, article.id).await.unwrap();
    assert_eq!(resubmitted.status, ArticleStatus::InRevisione);

    let reviewer_inbox = list_notifications(&h.deps, &reviewer).await.unwrap();
    assert!(reviewer_inbox
        .iter()
        .any(|n| n.title == "Articolo aggiornato e inviato"
            && n.message == "Anna Rossi ha aggiornato e inviato un articolo per la revisione"));
}

#[tokio::test]
async fn test_approving_a_draft_fails_without_mutation() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &writer, "Ancora bozza").await;

    let result = approve(&h.deps, &reviewer, article.id).await;
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));

    let stored = h
        .deps
        .store
        .find_article(article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ArticleStatus::Bozza);

    // No notification left the engine either
    assert_eq!(h.delivery.delivery_count(), 0);
}

#[tokio::test]
async fn test_only_the_author_submits() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let other = create_member(&h.deps, "Bruno", Role::Scrittore).await;
    let article = create_test_draft(&h.deps, &writer, "Mio").await;

    let result = submit_for_review(&h.deps, &other, article.id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
}

#[tokio::test]
async fn test_self_review_produces_no_notification() {
    // A reviewer who authors, submits and approves their own article never
    // notifies themselves.
    let h = harness();
    let reviewer = create_member(&h.deps, "Bruno", Role::Verificatore).await;
    let article = create_test_draft(&h.deps, &reviewer, "Autoprodotto").await;

    submit_for_review(&h.deps, &reviewer, article.id).await.unwrap();
    approve(&h.deps, &reviewer, article.id).await.unwrap();

    let inbox = list_notifications(&h.deps, &reviewer).await.unwrap();
    assert!(inbox.is_empty());
    assert_eq!(h.delivery.delivery_count(), 0);
}

#[tokio::test]
async fn test_excerpt_regenerated_on_every_content_update() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;
    let article = create_test_draft(&h.deps, &writer, "Excerpt").await;
    assert_eq!(article.excerpt, "Hello world");

    let long_body = format!("<p>{}</p>", "x".repeat(400));
    let updated = update_content(
        &h.deps,
        &writer,
        article.id,
        UpdateArticle {
            title: "Excerpt".to_string(),
            body: long_body,
            category: Some("Cultura".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.excerpt.chars().count(), 250);
    assert!(updated.excerpt.ends_with("..."));
    assert_eq!(updated.category.as_deref(), Some("Cultura"));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let h = harness();
    let writer = create_member(&h.deps, "Anna", Role::Scrittore).await;

    let result = create_article(
        &h.deps,
        &writer,
        NewArticle {
            title: "Categoria".to_string(),
            body: "testo".to_string(),
            category: Some("Gossip".to_string()),
        },
    )
    .await;
    assert!(matches!(result, Err(CoreError::ValidationFailed(_))));
}
