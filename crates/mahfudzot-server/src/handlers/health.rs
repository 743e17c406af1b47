//! Health check handler

use crate::AppState;
use axum::{extract::State, Json};
use mahfudzot_core::HealthResponse;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "mahfudzot-generator".to_string(),
        storage: state.quotes.backend_name().to_string(),
    })
}
