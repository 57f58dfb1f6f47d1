//! Money Transfer HTTP service
//!
//! Serves the in-memory ledger over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --host 0.0.0.0 --port 9000
//! cargo run -- --log-format json --log-level money_transfer=debug
//! MONEY_TRANSFER_PORT=9000 cargo run
//! ```
//!
//! State lives only in memory and is lost when the process exits.
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C)
//! - 1: Error (address in use, invalid arguments, etc.)

use anyhow::Context;
use money_transfer::api::{create_router, AppState};
use money_transfer::{cli, logging};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();
    logging::init(&args.log_level, args.log_format);

    let (host, port) = args.bind_address();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!(address = %listener.local_addr()?, "listening");

    let app = create_router(AppState::new());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
