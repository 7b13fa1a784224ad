use crate::models::{ChatRequest, ChatResponse};
use crate::services::build_messages;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

/// Relay one chat turn to the configured completion provider.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    // validate() guarantees presence
    let message = request.message.unwrap_or_default();

    tracing::info!(
        provider = state.provider.name(),
        history_len = request.history.len(),
        "Received chat request"
    );

    let messages = build_messages(&request.history, &message);

    let completion = state
        .provider
        .complete(&messages, &state.params)
        .await
        .map_err(|e| {
            tracing::error!(provider = state.provider.name(), error = %e, "Completion failed");
            AppError::from(e)
        })?;

    Ok(Json(ChatResponse::ok(completion.text)))
}
