//! Chat-completion client for the article rewrite service.
//!
//! [`ArticleRewriter`] is the seam between the batch protocol and the
//! generation service; [`OpenAiRewriter`] is the production implementation
//! targeting an OpenAI-compatible `chat/completions` endpoint.

pub mod client;
pub mod config;
pub mod types;

pub use client::OpenAiRewriter;
pub use config::{MissingCredential, RewriterConfig};

use async_trait::async_trait;
use newsroom_core::types::DbId;

/// Errors from the generation service.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Generation service error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Service-provided error message, or the raw body.
        message: String,
    },

    /// The response body did not contain a completion.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Produces rewritten article text under the fixed editorial instruction.
///
/// The batch protocol depends on failures being *returned*, never panicked:
/// one failed article must not take the rest of a batch down with it.
#[async_trait]
pub trait ArticleRewriter: Send + Sync {
    /// Rewrite `text`, returning the whitespace-trimmed result.
    ///
    /// `article_id` is for logging and correlation only. Callers must treat
    /// an empty result as "nothing usable was generated", not as success.
    async fn rewrite(&self, article_id: DbId, text: &str) -> Result<String, RewriteError>;
}
