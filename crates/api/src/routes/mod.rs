pub mod articles;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                    health_check
/// /articles                  list_articles
/// /articles/{id}             get_article
/// /articles/select           select_articles (batch)
/// /articles/select/{id}      select_article
/// /articles/rewrite/{id}     force_complete_article
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/articles", articles::router())
}
