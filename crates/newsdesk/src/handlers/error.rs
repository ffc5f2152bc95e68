use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsdesk_core::{service_error_to_status_code, ServiceError};

pub struct AppError(pub ServiceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = service_error_to_status_code(&self.0);
        let status_code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            let cause = self.0.source().map(ToString::to_string).unwrap_or_default();
            tracing::error!(status = %status_code, message = %self.0, %cause, "API error");
        } else {
            tracing::warn!(status = %status_code, message = %self.0, "API error");
        }

        (
            status_code,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<ServiceError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
