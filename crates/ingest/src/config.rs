//! Ingestion configuration.

use std::time::Duration;

/// Browser User-Agent sent with every request; some publishers refuse the
/// default reqwest UA.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Feeds polled when `RSS_FEEDS` is not set.
const DEFAULT_FEEDS: &[&str] = &[
    "http://www.hs.fi/rss/suomi.xml",
    "http://www.hs.fi/rss/maailma.xml",
    "https://www.hs.fi/rss/politiikka.xml",
];

/// A single RSS feed to poll.
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Human-readable source name stored on each article.
    pub name: String,
    /// Feed URL.
    pub url: String,
}

/// Configuration for an ingestion run, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Feeds to poll each run.
    pub feeds: Vec<FeedSource>,
    /// Maximum articles stored per feed per run.
    pub max_per_feed: usize,
    /// Pause between article page fetches (politeness throttle).
    pub article_pause: Duration,
    /// User-Agent header sent on every request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl IngestConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                        |
    /// |-----------------------|--------------------------------|
    /// | `RSS_FEEDS`           | the three HS.fi feeds          |
    /// | `RSS_SOURCE_NAME`     | `Helsingin Sanomat`            |
    /// | `INGEST_MAX_PER_FEED` | `10`                           |
    /// | `INGEST_PAUSE_SECS`   | `1`                            |
    /// | `INGEST_TIMEOUT_SECS` | `30`                           |
    pub fn from_env() -> Self {
        let name =
            std::env::var("RSS_SOURCE_NAME").unwrap_or_else(|_| "Helsingin Sanomat".into());

        let feeds: Vec<FeedSource> = std::env::var("RSS_FEEDS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect())
            .into_iter()
            .map(|url| FeedSource {
                name: name.clone(),
                url,
            })
            .collect();

        let max_per_feed: usize = std::env::var("INGEST_MAX_PER_FEED")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("INGEST_MAX_PER_FEED must be a valid usize");

        let pause_secs: u64 = std::env::var("INGEST_PAUSE_SECS")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("INGEST_PAUSE_SECS must be a valid u64");

        let timeout_secs: u64 = std::env::var("INGEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("INGEST_TIMEOUT_SECS must be a valid u64");

        Self {
            feeds,
            max_per_feed,
            article_pause: Duration::from_secs(pause_secs),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs,
        }
    }
}
