use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY is not set — refusing to start. \
         Set it in the environment or a .env file \
         (or PAPERCHAT_ALLOW_DUMMY_KEY=1 for offline development)"
    )]
    MissingApiKey,
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub chunking: ChunkingConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            llm: LlmConfig::from_env(),
            chunking: ChunkingConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:    {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  llm:       model={}, api_key={}, retries={}, delay={}s",
            self.llm.model,
            if self.llm.api_key.is_some() { "set" } else { "(none)" },
            self.llm.max_retries,
            self.llm.retry_delay_secs,
        );
        tracing::info!(
            "  chunking:  max_tokens={} (range {}..={})",
            self.chunking.max_tokens,
            ChunkingConfig::MIN_TOKENS,
            ChunkingConfig::MAX_TOKENS,
        );
    }

    /// Return a redacted view safe for API responses (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "server": { "host": self.server.host, "port": self.server.port },
            "llm": {
                "model": self.llm.model,
                "configured": self.llm.is_configured(),
                "max_retries": self.llm.max_retries,
                "retry_delay_secs": self.llm.retry_delay_secs,
            },
            "chunking": { "max_tokens": self.chunking.max_tokens },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3002),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── LLM (Gemini) ──────────────────────────────────────────────

/// Placeholder credential for offline development. Requests made with it
/// will be rejected by the API; it exists so the server can start without
/// a real key when explicitly allowed.
pub const DUMMY_API_KEY: &str = "dummy-key-for-offline-dev";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub max_retries: u32,
    pub retry_delay_secs: u64,
    /// Permit startup without a real key (development only).
    pub allow_dummy_key: bool,
}

impl LlmConfig {
    fn from_env() -> Self {
        Self {
            api_key: env_opt("GEMINI_API_KEY"),
            model: env_or("GEMINI_MODEL", "gemini-1.5-pro-latest"),
            max_retries: env_u32("LLM_MAX_RETRIES", 5),
            retry_delay_secs: env_u64("LLM_RETRY_DELAY_SECS", 10),
            allow_dummy_key: env_or("PAPERCHAT_ALLOW_DUMMY_KEY", "0") == "1",
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Resolve the credential to use, failing closed when none is supplied.
    /// The dummy fallback must be requested explicitly and is logged loudly.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        match &self.api_key {
            Some(key) => Ok(key.clone()),
            None if self.allow_dummy_key => {
                tracing::warn!(
                    "GEMINI_API_KEY not set — using a dummy placeholder key. \
                     All generation requests WILL fail. Never run this in production."
                );
                Ok(DUMMY_API_KEY.to_string())
            }
            None => Err(ConfigError::MissingApiKey),
        }
    }
}

// ── Chunking ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Default token budget per summarization chunk.
    pub max_tokens: usize,
}

impl ChunkingConfig {
    pub const MIN_TOKENS: usize = 100;
    pub const MAX_TOKENS: usize = 600;
    pub const DEFAULT_TOKENS: usize = 300;

    fn from_env() -> Self {
        Self {
            max_tokens: env_usize("CHUNK_MAX_TOKENS", Self::DEFAULT_TOKENS)
                .clamp(Self::MIN_TOKENS, Self::MAX_TOKENS),
        }
    }

    /// Clamp a user-supplied chunk size into the accepted range.
    pub fn clamp_tokens(tokens: usize) -> usize {
        tokens.clamp(Self::MIN_TOKENS, Self::MAX_TOKENS)
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: Self::DEFAULT_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_tokens_bounds_range() {
        assert_eq!(ChunkingConfig::clamp_tokens(50), 100);
        assert_eq!(ChunkingConfig::clamp_tokens(300), 300);
        assert_eq!(ChunkingConfig::clamp_tokens(9000), 600);
    }

    #[test]
    fn resolve_api_key_fails_closed_without_key() {
        let cfg = LlmConfig {
            api_key: None,
            model: "gemini-1.5-pro-latest".into(),
            max_retries: 5,
            retry_delay_secs: 10,
            allow_dummy_key: false,
        };
        assert!(cfg.resolve_api_key().is_err());
    }

    #[test]
    fn resolve_api_key_dummy_only_when_allowed() {
        let cfg = LlmConfig {
            api_key: None,
            model: "gemini-1.5-pro-latest".into(),
            max_retries: 5,
            retry_delay_secs: 10,
            allow_dummy_key: true,
        };
        assert_eq!(cfg.resolve_api_key().unwrap(), DUMMY_API_KEY);
    }

    #[test]
    fn resolve_api_key_prefers_real_key() {
        let cfg = LlmConfig {
            api_key: Some("real-key".into()),
            model: "gemini-1.5-pro-latest".into(),
            max_retries: 5,
            retry_delay_secs: 10,
            allow_dummy_key: true,
        };
        assert_eq!(cfg.resolve_api_key().unwrap(), "real-key");
    }
}
