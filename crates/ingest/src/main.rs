use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsroom_ingest::IngestConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsroom_ingest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = IngestConfig::from_env();
    tracing::info!(feeds = config.feeds.len(), "Loaded ingestion configuration");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = newsroom_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    newsroom_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    match newsroom_ingest::run_ingest(&pool, &config).await {
        Ok(summary) => {
            tracing::info!(stored = summary.stored, "Scrape finished");
        }
        Err(err) => {
            tracing::error!(error = %err, "Ingestion run aborted");
            std::process::exit(1);
        }
    }
}
