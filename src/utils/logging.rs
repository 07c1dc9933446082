//! Logging utilities
//!
//! Subscriber initialisation and log-safe request summaries

use crate::config::LoggingConfig;
use crate::models::openai::{OpenAIMessage, OpenAIRequest};
use anyhow::{Context, Result};
use tracing::info;

/// Set to true to log full outbound requests (system prompt included) at debug level
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Initialize logging system
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

fn filter_message(msg: &OpenAIMessage) -> serde_json::Value {
    // System prompts are long and identical on every call
    let max_chars = if msg.role == "system" { 60 } else { 200 };
    let content = match &msg.content {
        Some(text) => serde_json::Value::String(truncate_content(text, max_chars)),
        None => serde_json::Value::Null,
    };

    serde_json::json!({
        "role": msg.role,
        "content": content,
    })
}

/// Create a filtered summary of an outbound request for logging
pub fn create_request_log_summary(request: &OpenAIRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        let messages: Vec<serde_json::Value> = request.messages.iter().map(filter_message).collect();

        serde_json::json!({
            "model": request.model,
            "messages": messages,
        })
    }
}
