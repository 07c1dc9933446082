//! Health check handlers
//!
//! Provides application health status check endpoints

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Upstream credential status
    pub upstream: String,
    /// Model sent upstream
    pub model: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Basic health check
///
/// GET /health
/// Reports `degraded` while no upstream credential is configured. The process
/// still answers with 200 because it keeps serving.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    let (status, upstream) = if state.relay.has_credential() {
        ("healthy", "configured")
    } else {
        ("degraded", "missing_credential")
    };

    Json(build_response(status, upstream, state.relay.model()))
}

/// Liveness check
///
/// GET /health/live
/// Only confirms the process is running; does not look at configuration
pub async fn liveness_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");

    Json(build_response("alive", "not_checked", state.relay.model()))
}

fn build_response(status: &str, upstream: &str, model: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            upstream: upstream.to_string(),
            model: model.to_string(),
            uptime_seconds: get_uptime_seconds(),
        }),
    }
}

/// Get service uptime in seconds
pub fn get_uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}

/// Pin the uptime origin to process start rather than the first health request
pub fn mark_started() {
    Lazy::force(&START_TIME);
}
