//! RSS ingestion: poll feeds, extract full article bodies, and append
//! deduplicated rows to the article store.
//!
//! Every new row starts in the lifecycle's initial state; selection and
//! rewriting happen elsewhere. Failures are isolated per feed and per
//! entry so one broken feed never stops a run.

pub mod config;
pub mod extract;
pub mod feed;

pub use config::{FeedSource, IngestConfig};

use newsroom_db::models::article::CreateArticle;
use newsroom_db::repositories::ArticleRepo;
use newsroom_db::DbPool;

use std::time::Duration;

/// Errors from feed and page fetching.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A fetch returned a non-2xx status code.
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// The feed XML could not be parsed.
    #[error("{0}")]
    Parse(String),
}

/// Outcome counts for one ingestion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Feeds fetched and parsed without error.
    pub feeds_polled: usize,
    /// Feed entries considered.
    pub entries_seen: usize,
    /// New article rows stored.
    pub stored: usize,
    /// Entries skipped because the URL was already stored.
    pub skipped_existing: usize,
    /// Entries skipped because the page yielded no article body.
    pub skipped_unextractable: usize,
}

/// Poll every configured feed once and store new articles.
pub async fn run_ingest(
    pool: &DbPool,
    config: &IngestConfig,
) -> Result<IngestSummary, reqwest::Error> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let mut summary = IngestSummary::default();

    for source in &config.feeds {
        match ingest_feed(pool, &client, config, source, &mut summary).await {
            Ok(()) => summary.feeds_polled += 1,
            Err(err) => {
                tracing::warn!(url = %source.url, error = %err, "Failed to ingest feed");
            }
        }
    }

    tracing::info!(
        feeds = summary.feeds_polled,
        entries = summary.entries_seen,
        stored = summary.stored,
        skipped_existing = summary.skipped_existing,
        skipped_unextractable = summary.skipped_unextractable,
        "Ingestion run complete"
    );

    Ok(summary)
}

async fn ingest_feed(
    pool: &DbPool,
    client: &reqwest::Client,
    config: &IngestConfig,
    source: &FeedSource,
    summary: &mut IngestSummary,
) -> Result<(), IngestError> {
    let response = client.get(&source.url).send().await?;
    if !response.status().is_success() {
        return Err(IngestError::Status {
            status: response.status().as_u16(),
            url: source.url.clone(),
        });
    }
    let body = response.bytes().await?;
    let entries = feed::parse_entries(&body)?;

    let mut stored_from_feed = 0;
    for entry in entries {
        if stored_from_feed >= config.max_per_feed {
            break;
        }
        summary.entries_seen += 1;

        // Existence check before the page fetch saves the HTTP round-trip
        // for articles seen on a previous run.
        match ArticleRepo::exists_by_source_url(pool, &entry.link).await {
            Ok(true) => {
                tracing::debug!(url = %entry.link, "Skipping already-stored article");
                summary.skipped_existing += 1;
                continue;
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(url = %entry.link, error = %err, "Existence check failed");
                continue;
            }
        }

        let page = match fetch_page(client, &entry.link).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(url = %entry.link, error = %err, "Failed to fetch article page");
                summary.skipped_unextractable += 1;
                continue;
            }
        };

        let Some(extracted) = extract::extract_article(&page) else {
            tracing::warn!(url = %entry.link, "Could not find article content");
            summary.skipped_unextractable += 1;
            continue;
        };

        // Prefer the page's datePublished over the feed entry's timestamp.
        let published_at = extracted.published_at.or(entry.published_at);

        let create = CreateArticle {
            title: entry.title,
            content: extracted.content,
            source_url: entry.link.clone(),
            source: source.name.clone(),
            author: entry.author,
            published_at,
        };
        match ArticleRepo::insert_deduplicated(pool, &create).await {
            Ok(Some(article)) => {
                tracing::info!(article_id = article.id, title = %article.title, "Stored article");
                summary.stored += 1;
                stored_from_feed += 1;
            }
            Ok(None) => {
                summary.skipped_existing += 1;
            }
            Err(err) => {
                tracing::error!(url = %entry.link, error = %err, "Failed to store article");
            }
        }

        // Politeness pause between page fetches.
        tokio::time::sleep(config.article_pause).await;
    }

    Ok(())
}

async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, IngestError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(IngestError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}
