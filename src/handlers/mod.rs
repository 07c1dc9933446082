//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod chat;
pub mod health;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::services::{CompletionProvider, OpenAIClient, RequestRelay};
use anyhow::Result;
use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: RequestRelay,
}

impl AppState {
    /// State backed by the given provider
    pub fn with_provider(settings: &Settings, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            relay: RequestRelay::from_settings(settings, provider),
        }
    }
}

/// Create application router with the HTTP upstream client
pub async fn create_router(settings: Settings) -> Result<Router> {
    let client = OpenAIClient::from_config(&settings.upstream)?;
    let state = AppState::with_provider(&settings, Arc::new(client));

    Ok(router_with_state(Arc::new(state)))
}

/// Build the routes and middleware around an existing state
pub fn router_with_state(app_state: Arc<AppState>) -> Router {
    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(request_logging_middleware));

    Router::new()
        .route("/chat", post(chat::handle_chat))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(middleware_stack)
}
