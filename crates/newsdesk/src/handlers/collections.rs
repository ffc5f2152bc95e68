//! CRUD handlers shared by the news, videos and trending collections.
//!
//! Every handler is generic over [`CollectionItem`]; the router instantiates
//! them once per collection. Mutations load the whole content document, apply
//! a pure list operation and save the document back.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use newsdesk_core::content::{
    create_item, find_item, generate_id, remove_item, update_item, CollectionItem,
};
use newsdesk_core::ServiceError;

use crate::{
    handlers::{parse_json, AppError},
    state::AppState,
};

const SAVE_FAILED: &str = "Failed to save content";

/// Path parameters of an item route. Trailing sub-resource segments are ignored.
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub id: String,
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ServiceError> {
    parse_json(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ServiceError::bad_request("Invalid JSON body")
    })
}

/// List a collection (GET /api/{collection}).
pub async fn list_items<T: CollectionItem>(State(state): State<AppState>) -> Json<Vec<T>> {
    let doc = state.content.load().await;
    Json(T::items(&doc).clone())
}

/// Get one item (GET /api/{collection}/{id}).
pub async fn get_item<T: CollectionItem>(
    State(state): State<AppState>,
    Path(ItemPath { id }): Path<ItemPath>,
) -> Result<Json<T>, AppError> {
    let doc = state.content.load().await;
    let item = find_item::<T>(&doc, &id)?;
    Ok(Json(item.clone()))
}

/// Create an item (POST /api/{collection}).
pub async fn create<T: CollectionItem>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<T>), AppError> {
    let request = parse_body(&body)?;

    let mut doc = state
        .content
        .load_for_update()
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    let item = create_item::<T>(&mut doc, generate_id(T::KIND.id_prefix()), request);

    state
        .content
        .save(&doc)
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    tracing::info!(collection = %T::KIND, id = item.id(), "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Merge a partial update into an item (PUT /api/{collection}/{id}).
pub async fn update<T: CollectionItem>(
    State(state): State<AppState>,
    Path(ItemPath { id }): Path<ItemPath>,
    body: Bytes,
) -> Result<Json<T>, AppError> {
    let changes = parse_body(&body)?;

    let mut doc = state
        .content
        .load_for_update()
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    let item = update_item::<T>(&mut doc, &id, changes)?;

    state
        .content
        .save(&doc)
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    tracing::info!(collection = %T::KIND, id = %id, "Updated item");
    Ok(Json(item))
}

/// Remove an item (DELETE /api/{collection}/{id}).
pub async fn delete<T: CollectionItem>(
    State(state): State<AppState>,
    Path(ItemPath { id }): Path<ItemPath>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut doc = state
        .content
        .load_for_update()
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    remove_item::<T>(&mut doc, &id)?;

    state
        .content
        .save(&doc)
        .await
        .map_err(|e| ServiceError::storage(SAVE_FAILED, e))?;

    tracing::info!(collection = %T::KIND, id = %id, "Deleted item");
    Ok(Json(serde_json::json!({ "success": true })))
}

/// PUT or DELETE on a collection root.
pub async fn id_required() -> AppError {
    AppError(ServiceError::bad_request("ID required"))
}
