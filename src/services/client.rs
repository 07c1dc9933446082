//! HTTP client service
//!
//! Encapsulates HTTP communication with the OpenAI-compatible completion API

use crate::config::{Credential, UpstreamConfig};
use crate::models::openai::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error};

/// Upstream chat completion provider
///
/// The relay talks to the upstream service only through this trait, so tests
/// can substitute a stub.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name, for logging
    fn name(&self) -> &str;

    /// Send a chat completion request (non-streaming)
    async fn chat_complete(
        &self,
        request: OpenAIRequest,
        credential: &Credential,
    ) -> Result<OpenAIResponse>;
}

/// OpenAI-compatible API client
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client instance.
    ///
    /// No request timeout is configured; calls wait for the upstream to answer
    /// or for the transport to fail.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("printshop-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client for the configured upstream
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.base_url.clone())
    }

    /// Build the request URL
    fn build_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Handle HTTP response
    async fn handle_response(&self, response: Response) -> Result<OpenAIResponse> {
        let status = response.status();

        if status.is_success() {
            let completion: OpenAIResponse = response
                .json()
                .await
                .context("Failed to parse upstream response")?;

            debug!("Upstream request completed successfully");
            Ok(completion)
        } else {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as OpenAI error format
            if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(&error_text) {
                error!("Upstream API error: {:?}", error_response.error);
                anyhow::bail!("Upstream API error ({}): {}", status, error_response.error.message);
            } else {
                error!("Upstream API request failed: {} - {}", status, error_text);
                anyhow::bail!("Upstream API request failed: {} - {}", status, error_text);
            }
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIClient {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn chat_complete(
        &self,
        request: OpenAIRequest,
        credential: &Credential,
    ) -> Result<OpenAIResponse> {
        debug!("Sending chat completion request to {}", self.base_url);

        let response = self
            .client
            .post(self.build_url())
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to upstream")?;

        self.handle_response(response).await
    }
}
