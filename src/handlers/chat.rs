//! Chat relay handler

use crate::handlers::AppState;
use crate::models::{ChatReply, ChatRequest};
use crate::utils::error::AppResult;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Relay a pricing question
///
/// POST /chat
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    debug!("Received chat message ({} chars)", request.message.chars().count());

    let reply = state.relay.handle_chat(&request.message).await?;

    Ok(Json(reply))
}
