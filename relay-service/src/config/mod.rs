use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

/// Key value shipped in sample `.env` files; treated the same as no key.
pub const PLACEHOLDER_API_KEY: &str = "test_key_for_now";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub mode: CompletionMode,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            mode: CompletionMode::Mock,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Whether `/chat` calls the completion API or answers with the canned schema.
#[derive(Debug, Clone)]
pub enum CompletionMode {
    Mock,
    Live(Secret<String>),
}

impl CompletionMode {
    /// Resolve the mode from a raw `OPENAI_API_KEY` value.
    pub fn from_api_key(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => {
                CompletionMode::Live(Secret::new(key))
            }
            _ => CompletionMode::Mock,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, CompletionMode::Live(_))
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(RelayConfig {
            common: common_config,
            openai: OpenAiConfig {
                mode: CompletionMode::from_api_key(env::var("OPENAI_API_KEY").ok()),
                base_url: get_env("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
                model: get_env("OPENAI_MODEL", DEFAULT_MODEL),
                temperature: parse_env("OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
                max_tokens: parse_env("OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
                timeout_secs: parse_env("OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        Err(_) => Ok(default),
    }
}
