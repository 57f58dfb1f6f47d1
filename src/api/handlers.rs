//! Request handlers
//!
//! Handlers only decode input, call the ledger and encode the result; all
//! rules live in [`crate::core`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use super::routes::AppState;
use crate::core::AccountStore;
use crate::types::{Account, AccountId, LedgerError, NewAccount, Transfer, TransferId, TransferRequest};

type ApiResult<T> = Result<T, ApiError>;

/// Parse a numeric path segment, reporting bad input as `InvalidArgument`
fn parse_id(raw: &str, name: &str) -> Result<u64, LedgerError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| LedgerError::invalid_argument(format!("{name} must be an unsigned integer, got '{raw}'")))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// GET /accounts
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    let mut accounts = state.ledger.accounts().all_accounts();
    accounts.sort_by_key(|account| account.id);
    Json(accounts)
}

/// POST /accounts
///
/// A `null` body is passed through as a missing request.
pub async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<Option<NewAccount>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let Json(requested) = body?;
    let account = state.ledger.accounts().create(requested)?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Account>> {
    let id: AccountId = parse_id(&raw_id, "account id")?;
    Ok(Json(state.ledger.accounts().lookup(id)?))
}

/// POST /accounts/{id}/transfers
///
/// The account in the path is always the source; a `fromAccountId` in the
/// body is ignored.
pub async fn create_transfer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Option<TransferRequest>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transfer>)> {
    let from: AccountId = parse_id(&raw_id, "account id")?;
    let Json(request) = body?;
    let request = request.map(|request| TransferRequest {
        from_account_id: Some(from),
        ..request
    });

    let transfer = state.ledger.create_and_perform(request)?;
    Ok((StatusCode::CREATED, Json(transfer)))
}

/// GET /transfers
pub async fn list_transfers(State(state): State<AppState>) -> Json<Vec<Transfer>> {
    Json(state.ledger.all_transfers())
}

/// GET /transfers/{id}
pub async fn get_transfer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Transfer>> {
    let id: TransferId = parse_id(&raw_id, "transfer id")?;
    Ok(Json(state.ledger.transfer(id)?))
}
