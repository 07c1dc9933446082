//! Data models module
//!
//! Defines the relay's own request/reply bodies and the upstream chat completion structures

pub mod chat;
pub mod openai;

pub use chat::{ChatReply, ChatRequest};
