//! Route configuration for the ledger HTTP API.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /health | `health` | Liveness check |
//! | GET | /accounts | `list_accounts` | All accounts, ordered by id |
//! | POST | /accounts | `create_account` | Open an account |
//! | GET | /accounts/{id} | `get_account` | One account |
//! | POST | /accounts/{id}/transfers | `create_transfer` | Transfer out of the account |
//! | GET | /transfers | `list_transfers` | All transfers, ordered by id |
//! | GET | /transfers/{id} | `get_transfer` | One transfer |

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_account, create_transfer, get_account, get_transfer, health, list_accounts,
    list_transfers,
};
use crate::core::{InMemoryAccountStore, TransferEngine};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transfer engine, which also exposes the account store
    pub ledger: Arc<TransferEngine<InMemoryAccountStore>>,
}

impl AppState {
    /// State over an empty ledger
    pub fn new() -> Self {
        Self::with_ledger(Arc::new(TransferEngine::new(Arc::new(
            InMemoryAccountStore::new(),
        ))))
    }

    /// State over an existing ledger
    pub fn with_ledger(ledger: Arc<TransferEngine<InMemoryAccountStore>>) -> Self {
        Self { ledger }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}/transfers", post(create_transfer))
        .route("/transfers", get(list_transfers))
        .route("/transfers/{id}", get(get_transfer))
        .with_state(state)
}
