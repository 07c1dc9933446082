//! Print Shop Relay Library
//!
//! Answers print shop pricing questions by relaying them, together with a fixed
//! pricing policy, to an OpenAI-compatible chat completion API

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{Credential, Settings, SystemPrompt};
pub use handlers::{create_router, router_with_state, AppState};
pub use models::{ChatReply, ChatRequest};
pub use services::{CompletionProvider, OpenAIClient, RequestRelay};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
