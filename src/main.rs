//! Print Shop Relay Server
//!
//! HTTP service that forwards pricing questions to an OpenAI-compatible
//! chat completion API and returns the model's reply

use anyhow::{Context, Result};
use printshop_relay::config::Settings;
use printshop_relay::handlers::{create_router, health};
use printshop_relay::utils::logging::init_logging;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    health::mark_started();

    // Load settings from environment and .env files
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", printshop_relay::version_info());

    report_startup_config(&settings);

    // Create router
    let app = create_router(settings.clone()).await?;

    let addr = settings.bind_address();

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Print shop relay server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("💬 Chat endpoint: http://{}/chat", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Log what the operator needs to know about the loaded configuration
fn report_startup_config(settings: &Settings) {
    match &settings.upstream.api_key {
        Some(credential) => info!("✅ API key found, starts with: {}", credential),
        None => warn!(
            "❌ API key not found. Set {} or add it to a .env file; /chat will fail until then",
            printshop_relay::config::settings::API_KEY_VAR
        ),
    }

    info!(
        "Upstream: {} (model: {})",
        settings.upstream.base_url, settings.upstream.model
    );
    info!("System prompt source: {}", settings.system_prompt.source());
}
