use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsdesk_core::ServiceError;

use crate::handlers::AppError;

/// Unknown resource.
pub async fn not_found() -> AppError {
    AppError(ServiceError::not_found("Not found"))
}

/// Known resource, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError(ServiceError::MethodNotAllowed)
}

/// Gives the timeout layer's empty 408 response a JSON error body.
pub async fn timeout_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(serde_json::json!({ "error": "Request timeout" })),
    )
        .into_response()
}
