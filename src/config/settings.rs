//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use super::prompt::SystemPrompt;

/// Environment variable holding the upstream API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Default upstream base URL (Groq's OpenAI-compatible endpoint)
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default upstream model identifier
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream completion service configuration
    pub upstream: UpstreamConfig,
    /// Active system prompt
    pub system_prompt: SystemPrompt,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Upstream chat completion service configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API key, absent when not configured
    pub api_key: Option<Credential>,
    /// API base URL
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

/// Secret token for the upstream service.
///
/// `Debug` and `Display` never print the full value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key. Blank keys are treated as absent.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw key, for building the authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First four characters, safe to log
    pub fn preview(&self) -> String {
        self.0.chars().take(4).collect()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({}...)", self.preview())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...", self.preview())
    }
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        load_env_files();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// `Settings::new` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let settings = Self {
            server: ServerConfig {
                host: get_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_or_default("SERVER_PORT", "8000")
                    .parse()
                    .context("Invalid port number")?,
            },
            upstream: UpstreamConfig {
                api_key: lookup(API_KEY_VAR).and_then(Credential::new),
                base_url: get_or_default("UPSTREAM_BASE_URL", DEFAULT_BASE_URL),
                model: get_or_default("UPSTREAM_MODEL", DEFAULT_MODEL),
            },
            system_prompt: SystemPrompt::resolve(&lookup)
                .context("Failed to resolve system prompt")?,
            logging: LoggingConfig {
                level: get_or_default("RUST_LOG", "info"),
                format: get_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.upstream.base_url.starts_with("http") {
            anyhow::bail!("Invalid upstream base URL format, should start with 'http'");
        }

        if self.upstream.model.trim().is_empty() {
            anyhow::bail!("Upstream model cannot be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether an upstream credential was loaded
    pub fn has_credential(&self) -> bool {
        self.upstream.api_key.is_some()
    }

    /// Listen address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Load `.env` files into the process environment.
///
/// The file next to the executable is read first, then the one in the working
/// directory. Variables that are already set are never overwritten.
pub fn load_env_files() {
    if let Some(path) = executable_env_path() {
        if dotenv::from_path(&path).is_ok() {
            debug!("Loaded environment file: {:?}", path);
        }
    }
    dotenv::dotenv().ok();
}

fn executable_env_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join(".env"))
}
