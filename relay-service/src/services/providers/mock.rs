//! Mock provider used when no completion credential is configured.

use super::{Completion, CompletionParams, CompletionProvider, ProviderError};
use crate::models::{ChatMessage, FormSchema};
use async_trait::async_trait;

/// Answers every request with the canned contact form, without any I/O.
pub struct MockProvider {
    response: String,
}

impl MockProvider {
    pub fn new() -> Self {
        // Serializing a fixed, string-only struct cannot fail.
        let response = FormSchema::mock().to_json().unwrap_or_default();
        Self { response }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<Completion, ProviderError> {
        Ok(Completion {
            text: self.response.clone(),
        })
    }
}
