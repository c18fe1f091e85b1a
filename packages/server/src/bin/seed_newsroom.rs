// Seed a small newsroom and drive one full editorial cycle.
//
// Dev utility: wires the default dependency stack (in-memory store, webhook
// delivery when WEBHOOK_URL is set) and exercises draft → review → approval,
// the task board and the team chat end to end.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server_core::common::{ActorContext, Role};
use server_core::config::Config;
use server_core::domains::articles::actions::{self as article_actions, NewArticle};
use server_core::domains::chat::actions as chat_actions;
use server_core::domains::notifications::actions as notification_actions;
use server_core::domains::todos::actions as todo_actions;
use server_core::domains::todos::models::{NewTodo, TodoPriority};
use server_core::domains::users::actions as user_actions;
use server_core::domains::users::models::User;
use server_core::kernel::ServerDeps;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Seeding the giornalino newsroom");

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = ServerDeps::from_config(&config);

    // One member per role
    let writer = User::with_role(
        "anna.bianchi@scuola.it".to_string(),
        "Anna".to_string(),
        "Bianchi".to_string(),
        Role::Scrittore,
    );
    let reviewer = User::with_role(
        "bruno.conti@scuola.it".to_string(),
        "Bruno".to_string(),
        "Conti".to_string(),
        Role::Verificatore,
    );
    let admin = User::with_role(
        "carla.deluca@scuola.it".to_string(),
        "Carla".to_string(),
        "De Luca".to_string(),
        Role::Amministratore,
    );
    for user in [&writer, &reviewer, &admin] {
        deps.store.insert_user(user).await?;
    }
    println!("✓ Seeded 3 newsroom members");

    let writer_ctx = ActorContext::new(writer.id, writer.role);
    let reviewer_ctx = ActorContext::new(reviewer.id, reviewer.role);
    let admin_ctx = ActorContext::new(admin.id, admin.role);

    // Draft → submit → approve
    let article = article_actions::create_article(
        &deps,
        &writer_ctx,
        NewArticle {
            title: "La settimana dello sport".to_string(),
            body: "<p>Resoconto delle gare d'istituto, con le interviste ai vincitori.</p>"
                .to_string(),
            category: Some("Sport".to_string()),
        },
    )
    .await?;
    article_actions::submit_for_review(&deps, &writer_ctx, article.id).await?;
    let approved = article_actions::approve(&deps, &reviewer_ctx, article.id).await?;
    println!(
        "✓ Article \"{}\" went bozza → {}",
        approved.title, approved.status
    );

    // Task board and team chat
    todo_actions::create_todo(
        &deps,
        &admin_ctx,
        NewTodo {
            title: "Impaginare il numero di marzo".to_string(),
            description: Some("Copertina e sommario compresi".to_string()),
            priority: TodoPriority::Alta,
            assigned_to: Some(reviewer.id),
            article_ref: Some(article.id),
        },
    )
    .await?;
    chat_actions::send_message(
        &deps,
        &writer_ctx,
        "Il pezzo sullo sport è pronto per la revisione!".to_string(),
    )
    .await?;
    user_actions::touch_last_seen(&deps, &writer_ctx).await?;

    // Each member's unread feed
    for (name, ctx) in [
        ("Anna", &writer_ctx),
        ("Bruno", &reviewer_ctx),
        ("Carla", &admin_ctx),
    ] {
        let unread = notification_actions::unread_count(&deps, ctx).await?;
        println!("  {name}: {unread} notifiche non lette");
    }

    let online = user_actions::list_online_users(&deps, config.online_window_minutes).await?;
    println!("✓ {} member(s) online now", online.len());

    Ok(())
}
