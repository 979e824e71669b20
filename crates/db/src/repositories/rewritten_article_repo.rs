//! Repository for the `rewritten_articles` table.

use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::rewritten_article::{CreateRewrittenArticle, RewrittenArticle};

/// Column list for rewritten_articles queries.
const REWRITTEN_COLUMNS: &str =
    "id, original_article_id, rewritten_content, editor_approved, created_at";

/// Provides operations on generated rewrites.
pub struct RewrittenArticleRepo;

impl RewrittenArticleRepo {
    /// Insert a generated rewrite awaiting editor approval, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRewrittenArticle,
    ) -> Result<RewrittenArticle, sqlx::Error> {
        let query = format!(
            "INSERT INTO rewritten_articles (original_article_id, rewritten_content)
             VALUES ($1, $2)
             RETURNING {REWRITTEN_COLUMNS}"
        );
        sqlx::query_as::<_, RewrittenArticle>(&query)
            .bind(input.original_article_id)
            .bind(&input.rewritten_content)
            .fetch_one(pool)
            .await
    }

    /// Find the rewrite for a given source article, if any.
    ///
    /// Under normal operation at most one exists; should the documented
    /// concurrent-batch race ever produce duplicates, the earliest row wins.
    pub async fn find_by_original(
        pool: &PgPool,
        original_article_id: DbId,
    ) -> Result<Option<RewrittenArticle>, sqlx::Error> {
        let query = format!(
            "SELECT {REWRITTEN_COLUMNS} FROM rewritten_articles
             WHERE original_article_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, RewrittenArticle>(&query)
            .bind(original_article_id)
            .fetch_optional(pool)
            .await
    }
}
