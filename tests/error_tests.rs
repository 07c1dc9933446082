//! Error handling module unit tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use printshop_relay::utils::error::*;
use serde_json::Value;

async fn response_parts(error: AppError) -> (StatusCode, Option<String>, Value) {
    let response = error.into_response();
    let status = response.status();
    let kind = response
        .headers()
        .get(ERROR_KIND_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, kind, serde_json::from_slice(&body).unwrap())
}

#[test]
fn test_app_error_kinds() {
    let test_cases = vec![
        (AppError::missing_credential(), "configuration_error"),
        (AppError::Upstream("timed out".to_string()), "upstream_error"),
    ];

    for (error, expected_type) in test_cases {
        assert_eq!(error.error_type(), expected_type);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[test]
fn test_display_is_the_detail() {
    let error = AppError::Upstream("error sending request".to_string());
    assert_eq!(error.to_string(), "error sending request");
    assert_eq!(error.detail(), "error sending request");
    assert_eq!(AppError::missing_credential().to_string(), MISSING_CREDENTIAL_DETAIL);
}

#[tokio::test]
async fn test_configuration_error_response() {
    let (status, kind, body) = response_parts(AppError::missing_credential()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(kind.as_deref(), Some("configuration_error"));
    assert_eq!(body, serde_json::json!({"detail": "API Key is missing on Server"}));
}

#[tokio::test]
async fn test_upstream_error_response() {
    let cause = anyhow::anyhow!("connection refused").context("Failed to send request to upstream");
    let (status, kind, body) = response_parts(AppError::upstream(&cause)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(kind.as_deref(), Some("upstream_error"));
    assert_eq!(
        body,
        serde_json::json!({"detail": "Failed to send request to upstream: connection refused"})
    );
}

#[test]
fn test_error_response_serialization() {
    let response = AppError::Upstream("bad gateway".to_string()).to_error_response();
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"detail":"bad gateway"}"#);
}
