//! Axum HTTP surface — maps the REST routes onto the [`BookStore`]
//! operations and serves the built-in web UI.
//!
//! ## URL layout
//!
//! ```text
//! GET    /books        — full inventory
//! POST   /books        — create
//! GET    /books/{id}   — fetch one
//! PUT    /books/{id}   — partial update
//! DELETE /books/{id}   — remove
//! GET    /favicon.ico  → 204
//! GET    /             — inventory UI
//! ```

mod api;
mod ui;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::get,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::AppError;
use crate::store::BookStore;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — the store is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookStore>,
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn run_http(
    bind_addr: &str,
    store: Arc<BookStore>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(AppState { store });

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Http(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Http(format!("server error: {e}")))?;

    info!("http server shut down");
    Ok(())
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the full route table. Public so integration tests can drive the
/// router in-process without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/books",      get(api::list_books).post(api::create_book))
        .route("/books/{id}", get(api::get_book).put(api::update_book).delete(api::delete_book))
        // UI routes
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/",            get(ui::root))
        .with_state(state)
}
