use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;

use newsdesk_core::subscriptions::{is_valid_email, SUBSCRIBE_CONFIRMATION};
use newsdesk_core::ServiceError;

use crate::{
    handlers::{parse_json, AppError},
    state::AppState,
};

const SUBSCRIBE_FAILED: &str = "Subscription failed";

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

/// Add a newsletter subscriber (POST /api/subscribe).
pub async fn subscribe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let request: SubscribeRequest = parse_json(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected subscription body");
        ServiceError::bad_request(SUBSCRIBE_FAILED)
    })?;

    let email = request
        .email
        .filter(|email| is_valid_email(email))
        .ok_or_else(|| ServiceError::bad_request("Valid email required"))?;

    state
        .subscriptions
        .subscribe(&email)
        .await
        .map_err(|e| ServiceError::storage(SUBSCRIBE_FAILED, e))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": SUBSCRIBE_CONFIRMATION,
    })))
}
