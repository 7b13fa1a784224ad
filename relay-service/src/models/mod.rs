pub mod chat;
pub mod form_schema;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, HealthResponse};
pub use form_schema::{FieldType, FormField, FormSchema};
