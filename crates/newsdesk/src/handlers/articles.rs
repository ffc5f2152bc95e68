//! Article page handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use newsdesk_core::articles::wants_json;
use newsdesk_core::ServiceError;

use crate::{
    handlers::{parse_json, AppError},
    state::AppState,
};

const SAVE_FAILED: &str = "Failed to save article";

/// Path parameters of an article route. Trailing segments are ignored.
#[derive(Debug, Deserialize)]
pub struct ArticlePath {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveArticle {
    pub content: Option<String>,
}

/// Get an article (GET /api/articles/{filename}).
///
/// Raw HTML by default; `{"content": ...}` when the client accepts JSON.
pub async fn get_article(
    State(state): State<AppState>,
    Path(ArticlePath { filename }): Path<ArticlePath>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let html = state
        .articles
        .find(&filename)
        .await
        .ok_or_else(|| ServiceError::not_found("Article not found"))?;

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());

    if wants_json(accept) {
        Ok(Json(serde_json::json!({ "content": html })).into_response())
    } else {
        Ok(Html(html).into_response())
    }
}

/// Store an article (PUT /api/articles/{filename}).
pub async fn put_article(
    State(state): State<AppState>,
    Path(ArticlePath { filename }): Path<ArticlePath>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let content = parse_json::<SaveArticle>(&body)
        .ok()
        .and_then(|request| request.content)
        .ok_or_else(|| ServiceError::bad_request(SAVE_FAILED))?;

    state
        .articles
        .save(&filename, content)
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "filename": filename,
    })))
}

/// Any request to /api/articles without a filename.
pub async fn filename_required() -> AppError {
    AppError(ServiceError::bad_request("Filename required"))
}
