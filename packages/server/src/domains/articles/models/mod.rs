pub mod article;

pub use article::{Article, ArticleStatus, ARTICLE_CATEGORIES, EXCERPT_MAX_LENGTH};
