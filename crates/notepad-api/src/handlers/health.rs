//! Liveness and store reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::state::AppState;

/// `GET /api/v1/health`: 200 when the store answers a ping, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.notes.backend_name();
    match state.notes.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "store": store,
            })),
        ),
        Err(e) => {
            tracing::warn!(subsystem = "api", backend = store, error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "degraded",
                    "version": env!("CARGO_PKG_VERSION"),
                    "store": store,
                })),
            )
        }
    }
}
