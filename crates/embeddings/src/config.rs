use std::env;

/// Default embedding model identifier.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Default API base for the OpenAI-compatible backend.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default maximum number of texts per embedding call.
pub const DEFAULT_MAX_BATCH: usize = 50;

/// Environment-driven configuration for the embedding backend.
///
/// Constructed once per invocation and handed to whoever needs it; nothing
/// here lives in process-wide state.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Base URL of the OpenAI-compatible service.
    pub api_base: String,

    /// Bearer credential, if present in the environment.
    pub api_key: Option<String>,

    /// Model identifier recorded in the index artifact.
    pub model: String,

    /// Maximum number of texts per embedding call.
    pub max_batch: usize,
}

impl EmbeddingConfig {
    /// Read configuration from the environment.
    ///
    /// `OPENAI_API_KEY` supplies the credential; `KB_EMBED_API_BASE`,
    /// `KB_EMBED_MODEL`, and `KB_EMBED_BATCH` override the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("KB_EMBED_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            api_key: env::var("OPENAI_API_KEY").ok(),
            model: env::var("KB_EMBED_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_batch: env::var("KB_EMBED_BATCH")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_MAX_BATCH),
        }
    }
}
