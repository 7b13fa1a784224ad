pub mod prompt;
pub mod providers;

pub use prompt::{build_messages, SYSTEM_PROMPT};
pub use providers::{CompletionProvider, ProviderError};
