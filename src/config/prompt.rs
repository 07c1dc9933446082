//! System prompt resolution
//!
//! The pricing policy handed to the model is a single immutable string per
//! process. It is resolved once at startup from configuration, falling back to
//! the built-in per-page policy.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Built-in pricing policy
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"
You are a smart, concise assistant for 'My Xerox Shop'.
Your goal is to calculate printing costs instantly. Do not explain your logic. Just give the price.

PRICING RULES (Strict):
- 1 to 15 pages: ₹3.00 per page
- 16 to 99 pages: ₹2.00 per page
- 100 or more pages: ₹1.50 per page
- Binding: ₹40 extra
- Lamination: ₹30 extra

If the user asks for a price, reply ONLY like this:
"Total: ₹[Amount] (Calculation: [Pages] x [Rate])"
"#;

/// File name searched for in the config and working directories
pub const PROMPT_FILE_NAME: &str = "system_prompt.txt";

/// Where the active prompt came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// `SYSTEM_PROMPT` environment variable
    Inline,
    /// A prompt file on disk
    File(PathBuf),
    /// [`DEFAULT_SYSTEM_PROMPT`]
    BuiltIn,
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSource::Inline => write!(f, "SYSTEM_PROMPT variable"),
            PromptSource::File(path) => write!(f, "file {}", path.display()),
            PromptSource::BuiltIn => write!(f, "built-in policy"),
        }
    }
}

/// The active system prompt
#[derive(Debug, Clone)]
pub struct SystemPrompt {
    text: Arc<str>,
    source: PromptSource,
}

impl SystemPrompt {
    /// Prompt from a literal string
    pub fn new(text: impl Into<Arc<str>>, source: PromptSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// The built-in per-page policy
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT, PromptSource::BuiltIn)
    }

    /// Resolve the prompt using the default search locations.
    ///
    /// Order: `SYSTEM_PROMPT`, `SYSTEM_PROMPT_FILE`,
    /// `~/.config/printshop-relay/system_prompt.txt`, `./system_prompt.txt`,
    /// then the built-in policy.
    pub fn resolve<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve_with_candidates(lookup, &default_candidates())
    }

    /// Resolve the prompt, searching `candidates` when no variable is set
    pub fn resolve_with_candidates<F>(lookup: &F, candidates: &[PathBuf]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(inline) = lookup("SYSTEM_PROMPT").filter(|s| !s.trim().is_empty()) {
            return Ok(Self::new(inline, PromptSource::Inline));
        }

        if let Some(path) = lookup("SYSTEM_PROMPT_FILE").filter(|s| !s.trim().is_empty()) {
            return Self::from_file(Path::new(&path));
        }

        for candidate in candidates {
            if candidate.is_file() {
                return Self::from_file(candidate);
            }
        }

        Ok(Self::builtin())
    }

    /// Load a prompt from a file. Blank files are rejected.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading system prompt from: {:?}", path);

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read system prompt file: {:?}", path))?;

        if text.trim().is_empty() {
            anyhow::bail!("System prompt file is empty: {:?}", path);
        }

        Ok(Self::new(text, PromptSource::File(path.to_path_buf())))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the prompt text
    pub fn shared(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn source(&self) -> &PromptSource {
        &self.source
    }
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("printshop-relay").join(PROMPT_FILE_NAME));
    }
    candidates.push(PathBuf::from(PROMPT_FILE_NAME));
    candidates
}
