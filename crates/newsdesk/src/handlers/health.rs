//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (reads the content document from the store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use newsdesk_core::storage::{Namespace, CONTENT_KEY};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the blob store answers a read, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> Response {
    let backend = state.store.backend_name();

    match state.store.get(Namespace::Content, CONTENT_KEY).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "backend": backend,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(backend, error = %e, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "backend": backend,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
