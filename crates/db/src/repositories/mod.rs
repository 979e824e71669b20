//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod rewritten_article_repo;

pub use article_repo::ArticleRepo;
pub use rewritten_article_repo::RewrittenArticleRepo;
