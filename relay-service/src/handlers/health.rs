use crate::models::HealthResponse;
use axum::Json;

/// Liveness probe; never touches the completion provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Relay service is running".to_string(),
    })
}
