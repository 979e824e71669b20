use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsroom_llm::{OpenAiRewriter, RewriterConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsroom_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing credential must stop the process before any work starts,
    // not fail article by article.
    let config = RewriterConfig::from_env().expect("Generation service credential missing");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = newsroom_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    newsroom_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let rewriter = OpenAiRewriter::new(config);

    match newsroom_worker::run_batch(&pool, &rewriter).await {
        Ok(summary) => {
            tracing::info!(
                rewritten = summary.rewritten,
                skipped_empty = summary.skipped_empty,
                failed = summary.failed,
                "Batch run finished"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "Batch run aborted");
            std::process::exit(1);
        }
    }
}
