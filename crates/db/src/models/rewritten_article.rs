//! Rewritten article models.

use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rewritten_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RewrittenArticle {
    pub id: DbId,
    /// Back-reference to the source article; not an ownership FK.
    pub original_article_id: DbId,
    pub rewritten_content: String,
    pub editor_approved: bool,
    pub created_at: Timestamp,
}

/// DTO for persisting a generated rewrite.
///
/// `editor_approved` always starts false; the column default supplies it.
#[derive(Debug, Clone)]
pub struct CreateRewrittenArticle {
    pub original_article_id: DbId,
    pub rewritten_content: String,
}
