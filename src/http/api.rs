//! Axum handlers for the `/books` routes.
//!
//! Each handler receives [`AppState`] via [`axum::extract::State`], calls
//! the corresponding [`BookStore`](crate::store::BookStore) operation and
//! maps its error onto the HTTP status table: `NotFound` → 404,
//! `InvalidInput` → 400, anything else → 500. Request bodies are extracted
//! as `Result<Json<_>, JsonRejection>` so a malformed or non-object body
//! becomes a 400 instead of the extractor's default rejection.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::AppError;
use crate::store::{BookPatch, NewBook};

use super::AppState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

/// Map a store error onto the wire.
fn error_response(e: AppError) -> Response {
    match e {
        AppError::NotFound(_) => (StatusCode::NOT_FOUND, json_error("not_found", e)).into_response(),
        AppError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, json_error("invalid_input", e)).into_response()
        }
        other => {
            warn!("store operation failed: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json_error("internal", other),
            )
                .into_response()
        }
    }
}

/// Turn an extractor rejection (malformed JSON, wrong content type, a body
/// that is not an object) into the store's `InvalidInput`.
fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::InvalidInput(format!("malformed request body: {rejection}"))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /books
pub(super) async fn list_books(State(state): State<AppState>) -> Response {
    match state.store.list() {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /books/{id}
pub(super) async fn get_book(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get(id) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /books
pub(super) async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Response {
    let new = match body {
        Ok(Json(new)) => new,
        Err(rejection) => return error_response(invalid_body(rejection)),
    };
    match state.store.create(new) {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => {
            warn!("create rejected: {e}");
            error_response(e)
        }
    }
}

/// PUT /books/{id}
pub(super) async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<BookPatch>, JsonRejection>,
) -> Response {
    let patch = match body {
        Ok(Json(patch)) => patch,
        Err(rejection) => return error_response(invalid_body(rejection)),
    };
    match state.store.update(id, patch) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /books/{id}
pub(super) async fn delete_book(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "result": true }))).into_response(),
        Err(e) => error_response(e),
    }
}
