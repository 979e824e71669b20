//! Route definitions for the article lifecycle endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes, mounted at `/articles`.
///
/// ```text
/// GET    /                 list_articles
/// GET    /{id}             get_article
/// POST   /select           select_articles (batch)
/// POST   /select/{id}      select_article
/// POST   /rewrite/{id}     force_complete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list_articles))
        .route("/select", post(articles::select_articles))
        .route("/select/{id}", post(articles::select_article))
        .route("/rewrite/{id}", post(articles::force_complete_article))
        .route("/{id}", get(articles::get_article))
}
