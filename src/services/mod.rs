//! Service layer module
//!
//! Contains the upstream HTTP client and the request relay

pub mod client;
pub mod relay;

pub use client::{CompletionProvider, OpenAIClient};
pub use relay::RequestRelay;
