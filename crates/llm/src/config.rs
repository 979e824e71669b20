//! Generation service configuration.

/// Configuration for [`OpenAiRewriter`](crate::OpenAiRewriter), loaded from
/// environment variables.
#[derive(Debug, Clone)]
pub struct RewriterConfig {
    /// API credential. Absence is a fatal startup condition.
    pub api_key: String,
    /// Model name (default: `gpt-4o`).
    pub model: String,
    /// Base API URL, no trailing slash (default: `https://api.openai.com/v1`).
    pub base_url: String,
}

/// The generation service credential is not set.
#[derive(Debug, thiserror::Error)]
#[error("OPENAI_API_KEY is missing. Please set the OPENAI_API_KEY environment variable")]
pub struct MissingCredential;

impl RewriterConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | (required)                  |
    /// | `OPENAI_MODEL`    | `gpt-4o`                    |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    ///
    /// Returns [`MissingCredential`] when the API key is absent so binaries
    /// fail fast at startup instead of on the first generation call.
    pub fn from_env() -> Result<Self, MissingCredential> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| MissingCredential)?;

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into());

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
