//! Bookshelf — service entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Build the (optionally seeded) book store
//!   5. Spawn Ctrl-C → shutdown signal watcher
//!   6. Run the HTTP server until shutdown

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use bookshelf::{config, error::AppError, http, logger, store::BookStore};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;

    logger::parse_level(&config.server.log_level)?;
    logger::init(&config.server.log_level)?;

    info!(
        bind = %config.server.bind,
        log_level = %config.server.log_level,
        seed = config.seed,
        "config loaded"
    );

    let store = Arc::new(if config.seed {
        BookStore::seeded()
    } else {
        BookStore::new()
    });

    // Shared shutdown token — Ctrl-C cancels it, the server loop watches it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    http::run_http(&config.server.bind, store, shutdown).await
}
