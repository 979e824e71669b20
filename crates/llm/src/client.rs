//! HTTP client for the chat-completion endpoint.

use async_trait::async_trait;
use newsroom_core::prompt::{build_user_prompt, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use newsroom_core::types::DbId;

use crate::config::RewriterConfig;
use crate::types::{ApiErrorBody, CompletionRequest, CompletionResponse, Message};
use crate::{ArticleRewriter, RewriteError};

/// Rewriter backed by an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiRewriter {
    client: reqwest::Client,
    config: RewriterConfig,
}

impl OpenAiRewriter {
    /// Create a new rewriter with its own HTTP client.
    pub fn new(config: RewriterConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a rewriter reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components).
    pub fn with_client(client: reqwest::Client, config: RewriterConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ArticleRewriter for OpenAiRewriter {
    async fn rewrite(&self, article_id: DbId, text: &str) -> Result<String, RewriteError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: build_user_prompt(text),
                },
            ],
            max_tokens: Some(MAX_OUTPUT_TOKENS),
            temperature: Some(TEMPERATURE),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(RewriteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            RewriteError::InvalidResponse(format!("Failed to parse response: {e}"))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| RewriteError::InvalidResponse("No completion in response".to_string()))?;

        let rewritten = content.trim().to_string();
        tracing::debug!(
            article_id,
            chars = rewritten.len(),
            "Received rewrite from generation service"
        );
        Ok(rewritten)
    }
}

impl std::fmt::Debug for OpenAiRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiRewriter")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
