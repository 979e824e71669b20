//! Handlers for article listing and lifecycle transitions.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use newsroom_core::error::CoreError;
use newsroom_core::lifecycle::RewriteStatus;
use newsroom_core::types::DbId;
use newsroom_db::models::article::{Article, ArticleSummary, SelectArticles, SelectionResult};
use newsroom_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /articles/
///
/// List `{id, title, status}` for every stored article.
pub async fn list_articles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: articles }))
}

/// GET /articles/{id}
///
/// A single article's `{id, title, status}`, or a 404 error payload.
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = fetch_article(&state, article_id).await?;

    let summary = ArticleSummary {
        id: article.id,
        title: article.title,
        status: article.status,
    };
    Ok(Json(DataResponse { data: summary }))
}

/// POST /articles/select/{id}
///
/// Transition an article to `pending`. Selecting an already-pending
/// article is a no-op confirmation; a `completed` article cannot be
/// re-selected.
pub async fn select_article(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = fetch_article(&state, article_id).await?;
    let current = parse_status(&article)?;

    if !current.can_transition_to(RewriteStatus::Pending) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Article {article_id} is already {current} and cannot be selected for rewriting"
        ))));
    }

    ArticleRepo::set_status(&state.pool, article_id, RewriteStatus::Pending).await?;

    tracing::info!(article_id, "Article selected for rewriting");

    Ok(Json(MessageResponse {
        message: format!("Article {article_id} selected for rewriting"),
    }))
}

/// POST /articles/select
///
/// Mark a list of articles `pending` in one statement. Unknown IDs and
/// already-`completed` articles are skipped; the count of articles
/// actually moved (or re-confirmed) is returned.
pub async fn select_articles(
    State(state): State<AppState>,
    Json(input): Json<SelectArticles>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("No article IDs provided".to_string()));
    }

    let selected = ArticleRepo::select_for_rewrite(&state.pool, &input.ids).await?;

    tracing::info!(
        requested = input.ids.len(),
        selected,
        "Batch article selection"
    );

    Ok(Json(DataResponse {
        data: SelectionResult { selected },
    }))
}

/// POST /articles/rewrite/{id}
///
/// Administrative override: mark an article `completed` without invoking
/// generation. No rewritten_articles row is produced -- callers wanting
/// generated content must go through the batch worker instead.
pub async fn force_complete_article(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    fetch_article(&state, article_id).await?;

    ArticleRepo::set_status(&state.pool, article_id, RewriteStatus::Completed).await?;

    tracing::warn!(article_id, "Article force-marked completed without generation");

    Ok(Json(MessageResponse {
        message: format!("Article {article_id} marked as completed"),
    }))
}

/// Load an article or produce the standard 404 error.
async fn fetch_article(state: &AppState, article_id: DbId) -> Result<Article, AppError> {
    ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id: article_id,
        }))
}

/// Parse the stored status string; an unknown value means state drift and
/// surfaces as an internal error.
fn parse_status(article: &Article) -> Result<RewriteStatus, AppError> {
    article.status.parse::<RewriteStatus>().map_err(|err| {
        AppError::Core(CoreError::Internal(format!(
            "Article {} has an unrecognized status: {err}",
            article.id
        )))
    })
}
