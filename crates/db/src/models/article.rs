//! Article entity models and DTOs.

use newsroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub source_url: String,
    pub source: String,
    pub author: Option<String>,
    pub published_at: Option<Timestamp>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a freshly scraped article.
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub source_url: String,
    pub source: String,
    pub author: Option<String>,
    pub published_at: Option<Timestamp>,
}

/// The `{id, title, status}` projection exposed by the HTTP API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleSummary {
    pub id: DbId,
    pub title: String,
    pub status: String,
}

/// Request body for batch selection via `POST /articles/select`.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectArticles {
    pub ids: Vec<DbId>,
}

/// Result payload for batch selection.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    /// Number of articles actually moved to `pending`.
    pub selected: u64,
}

/// A pending-rewrite candidate fetched by the batch protocol.
#[derive(Debug, Clone, FromRow)]
pub struct RewriteCandidate {
    pub id: DbId,
    pub content: String,
}
