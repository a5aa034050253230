//! API route handlers.
//!
//! Every endpoint answers a JSON envelope with an `ok` flag; failures add
//! an `error` string and a matching HTTP status.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use easel_core::PlaceholderRecord;

use crate::store::StoreError;
use crate::AppState;

/// Request body for `/api/save`.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// A base64 image data URL of the canvas.
    #[serde(rename = "dataUrl")]
    pub data_url: String,
}

/// Request body for `/api/delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    /// The stored basename to delete.
    pub filename: String,
}

fn status_for(error: &StoreError) -> StatusCode {
    match error {
        StoreError::InvalidDataUrl(_) | StoreError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Io(_) | StoreError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure(error: &StoreError) -> (StatusCode, Json<Value>) {
    (
        status_for(error),
        Json(json!({ "ok": false, "error": error.to_string() })),
    )
}

/// Store a canvas snapshot posted as a data URL.
#[tracing::instrument(name = "save_image", skip(state, request))]
pub async fn save_image(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest>,
) -> (StatusCode, Json<Value>) {
    match state.store.save_data_url(&request.data_url) {
        Ok(saved) => (
            StatusCode::OK,
            Json(json!({ "ok": true, "filename": saved.filename, "url": saved.url })),
        ),
        Err(err) => {
            tracing::warn!("Image save rejected: {}", err);
            failure(&err)
        }
    }
}

/// Delete a stored image by filename.
#[tracing::instrument(name = "delete_image", skip(state))]
pub async fn delete_image(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> (StatusCode, Json<Value>) {
    match state.store.delete(&request.filename) {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(err) => {
            tracing::warn!("Image delete rejected: {}", err);
            failure(&err)
        }
    }
}

/// List stored image filenames.
#[tracing::instrument(name = "list_images", skip(state))]
pub async fn list_images(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.list() {
        Ok(images) => (StatusCode::OK, Json(json!({ "ok": true, "images": images }))),
        Err(err) => {
            tracing::error!("Image listing failed: {}", err);
            failure(&err)
        }
    }
}

/// Append one placeholder record to the store's log.
#[tracing::instrument(name = "save_placeholder", skip(state, record), fields(word = %record.word))]
pub async fn save_placeholder(
    State(state): State<AppState>,
    Json(record): Json<PlaceholderRecord>,
) -> (StatusCode, Json<Value>) {
    match state.store.record_placeholder(&record) {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(err) => {
            tracing::error!("Placeholder record failed: {}", err);
            failure(&err)
        }
    }
}
