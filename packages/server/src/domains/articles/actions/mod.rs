pub mod editing;
pub mod review;
pub mod stats;

pub use editing::{
    create_article, delete_article, get_article, list_articles, update_content, NewArticle,
    UpdateArticle,
};
pub use review::{approve, reject, submit_for_review};
pub use stats::{dashboard_stats, DashboardStats};
