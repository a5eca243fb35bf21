//! Layered settings for the generation services.
//!
//! Sources, later overriding earlier: optional `aura.toml` in the
//! working directory, `AURA__`-prefixed environment variables, and the
//! `OPENAI_API_KEY` / `OPENAI_BASE_URL` convenience variables.

use serde::Deserialize;
use std::env;

/// Chat model settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmSettings {
    /// Friendly model name, resolved through the catalog
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// API credential; construction fails fast when empty
    pub api_key: String,
    /// OpenAI-compatible endpoint override
    pub base_url: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "sonnet".to_string(),
            temperature: 0.0,
            top_p: 0.0,
            max_tokens: 4096,
            api_key: String::new(),
            base_url: None,
        }
    }
}

/// Rate limiter settings, one independent bucket per service
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Max acquisitions per window
    pub max_rate: usize,
    /// Window length in seconds
    pub time_period_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_rate: 50,
            time_period_secs: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level settings for the pipeline
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub rate_limit: RateLimitSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from file and environment layers
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("aura").required(false))
            .add_source(config::Environment::with_prefix("AURA").separator("__"));

        // Convenience env var overrides (highest priority)
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            builder = builder.set_override("llm.api_key", key)?;
        }
        if let Ok(url) = env::var("OPENAI_BASE_URL") {
            builder = builder.set_override("llm.base_url", url)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "sonnet");
        assert_eq!(settings.llm.max_tokens, 4096);
        assert_eq!(settings.rate_limit.max_rate, 50);
        assert_eq!(settings.rate_limit.time_period_secs, 60);
        assert!(settings.llm.api_key.is_empty());
    }
}
