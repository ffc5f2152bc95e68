//! Upload acknowledgement stub.
//!
//! The request body is never read and nothing is persisted.

use axum::{extract::Path, Json};
use chrono::Utc;

const DEFAULT_UPLOAD_TYPE: &str = "file";

fn acknowledge(upload_type: &str) -> Json<serde_json::Value> {
    tracing::info!(upload_type, "Upload stub called");

    Json(serde_json::json!({
        "success": true,
        "message": format!(
            "Upload endpoint for {upload_type} received. For production use, implement proper file handling."
        ),
        "filename": format!("uploaded_{}", Utc::now().timestamp_millis()),
    }))
}

/// POST /api/upload
pub async fn upload() -> Json<serde_json::Value> {
    acknowledge(DEFAULT_UPLOAD_TYPE)
}

/// POST /api/upload/{type}
pub async fn upload_typed(Path(upload_type): Path<String>) -> Json<serde_json::Value> {
    acknowledge(&upload_type)
}
