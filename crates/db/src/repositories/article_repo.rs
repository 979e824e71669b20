//! Repository for the `articles` table.

use newsroom_core::lifecycle::RewriteStatus;
use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleSummary, CreateArticle, RewriteCandidate};

/// Column list for articles queries.
const ARTICLE_COLUMNS: &str =
    "id, title, content, source_url, source, author, published_at, status, created_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a scraped article, deduplicated by source URL.
    ///
    /// Returns the created row, or `None` when a row for the same
    /// `source_url` already exists -- the insert is a no-op, not an error.
    /// New rows start in the lifecycle's initial state via the column
    /// default.
    pub async fn insert_deduplicated(
        pool: &PgPool,
        input: &CreateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, source_url, source, author, published_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (source_url) DO NOTHING
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.source_url)
            .bind(&input.source)
            .bind(&input.author)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Whether an article with the given source URL is already stored.
    pub async fn exists_by_source_url(
        pool: &PgPool,
        source_url: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE source_url = $1)")
                .bind(source_url)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List `{id, title, status}` for every article, insertion order.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ArticleSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArticleSummary>(
            "SELECT id, title, status FROM articles ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Set an article's lifecycle status, returning the rows updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: RewriteStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE articles SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Mark several articles `pending` in one statement.
    ///
    /// Already-`pending` articles are updated in place (selection is
    /// idempotent); `completed` articles are left untouched, since nothing
    /// transitions out of the terminal state. Unknown IDs are ignored.
    pub async fn select_for_rewrite(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE articles SET status = $1 WHERE id = ANY($2) AND status <> $3")
                .bind(RewriteStatus::Pending.as_str())
                .bind(ids)
                .bind(RewriteStatus::Completed.as_str())
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Fetch the batch protocol's candidates: every `pending` article with
    /// no rewritten counterpart, in insertion order.
    ///
    /// The `NOT IN` existence check is the sole duplicate guard and is a
    /// point-in-time read, not a transactional claim: two batch runs
    /// executing concurrently can both see the same candidate.
    pub async fn list_pending_unrewritten(
        pool: &PgPool,
    ) -> Result<Vec<RewriteCandidate>, sqlx::Error> {
        sqlx::query_as::<_, RewriteCandidate>(
            "SELECT id, content FROM articles
             WHERE status = $1
               AND id NOT IN (SELECT original_article_id FROM rewritten_articles)
             ORDER BY id ASC",
        )
        .bind(RewriteStatus::Pending.as_str())
        .fetch_all(pool)
        .await
    }
}
