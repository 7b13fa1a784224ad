//! Completion provider abstractions and implementations.
//!
//! The relay talks to one provider chosen at startup: the OpenAI chat
//! completions API when a credential is configured, the mock otherwise.

pub mod mock;
pub mod openai;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;

use crate::config::{CompletionMode, OpenAiConfig};
use crate::models::ChatMessage;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("OpenAI client initialization failed: {0}")]
    ClientInit(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&OpenAiConfig> for CompletionParams {
    fn from(config: &OpenAiConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Text of the first choice, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short label for logs and metrics.
    fn name(&self) -> &'static str;

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<Completion, ProviderError>;
}

/// Pick the provider for the resolved credential mode.
pub fn provider_for(config: &OpenAiConfig) -> Arc<dyn CompletionProvider> {
    match &config.mode {
        CompletionMode::Live(api_key) => {
            tracing::info!(
                model = %config.model,
                base_url = %config.base_url,
                "Using OpenAI completion provider"
            );
            Arc::new(OpenAiProvider::new(config.clone(), api_key.clone()))
        }
        CompletionMode::Mock => {
            tracing::warn!("OPENAI_API_KEY missing or placeholder, returning mock form schemas");
            Arc::new(MockProvider::new())
        }
    }
}
