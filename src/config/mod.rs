//! Configuration management module
//!
//! Loads settings from environment variables and `.env` files, and resolves the system prompt.

pub mod prompt;
pub mod settings;

pub use prompt::{PromptSource, SystemPrompt};
pub use settings::{Credential, LoggingConfig, ServerConfig, Settings, UpstreamConfig};
