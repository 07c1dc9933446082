//! Request relay
//!
//! Turns one chat message into one upstream completion call and maps the
//! outcome back to a reply or an [`AppError`].

use crate::config::{Credential, Settings};
use crate::models::openai::{OpenAIMessage, OpenAIRequest};
use crate::models::ChatReply;
use crate::services::client::CompletionProvider;
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::create_request_log_summary;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Relays pricing questions to the completion provider.
///
/// Everything it holds is fixed at construction and shared read-only between
/// concurrent requests.
#[derive(Clone)]
pub struct RequestRelay {
    credential: Option<Credential>,
    system_prompt: Arc<str>,
    model: String,
    provider: Arc<dyn CompletionProvider>,
}

impl fmt::Debug for RequestRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestRelay")
            .field("credential", &self.credential)
            .field("model", &self.model)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl RequestRelay {
    pub fn new(
        credential: Option<Credential>,
        system_prompt: Arc<str>,
        model: impl Into<String>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            credential,
            system_prompt,
            model: model.into(),
            provider,
        }
    }

    /// Build a relay from loaded settings and a provider
    pub fn from_settings(settings: &Settings, provider: Arc<dyn CompletionProvider>) -> Self {
        Self::new(
            settings.upstream.api_key.clone(),
            settings.system_prompt.shared(),
            settings.upstream.model.clone(),
            provider,
        )
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The two-message conversation sent upstream: policy first, then the
    /// caller's message exactly as received.
    pub fn build_request(&self, message: &str) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAIMessage::system(&*self.system_prompt),
                OpenAIMessage::user(message),
            ],
        }
    }

    /// Answer one chat message
    pub async fn handle_chat(&self, message: &str) -> AppResult<ChatReply> {
        let credential = match &self.credential {
            Some(credential) => credential,
            None => {
                warn!("Rejecting chat request: upstream credential is not configured");
                return Err(AppError::missing_credential());
            }
        };

        let request = self.build_request(message);

        if let Ok(summary) = serde_json::to_string_pretty(&create_request_log_summary(&request)) {
            debug!("🔄 Upstream Request:\n{}", summary);
        }

        let response = match self.provider.chat_complete(request, credential).await {
            Ok(response) => response,
            Err(e) => {
                error!("Upstream call via {} failed: {:#}", self.provider.name(), e);
                return Err(AppError::upstream(&e));
            }
        };

        match response.first_content() {
            Some(text) => {
                debug!("Upstream replied with {} chars", text.chars().count());
                Ok(ChatReply {
                    reply: text.to_string(),
                })
            }
            None if response.choices.is_empty() => Err(AppError::Upstream(
                "Upstream response contained no choices".to_string(),
            )),
            None => Err(AppError::Upstream(
                "Upstream response contained no message content".to_string(),
            )),
        }
    }
}
