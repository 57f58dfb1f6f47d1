//! Mapping from ledger errors to HTTP responses
//!
//! Every [`LedgerError`] kind maps to exactly one status code in
//! [`status_for`]. Error bodies look like:
//!
//! ```json
//! { "error": "account_not_found", "message": "Account 7 does not exist" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::debug;

use crate::types::LedgerError;

/// HTTP status for each error kind
pub fn status_for(error: &LedgerError) -> StatusCode {
    match error {
        LedgerError::InvalidArgument { .. } | LedgerError::TransferValidation { .. } => {
            StatusCode::BAD_REQUEST
        }
        LedgerError::AccountNotFound { .. } | LedgerError::TransferNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        LedgerError::DuplicateAccount { .. } | LedgerError::InsufficientBalance { .. } => {
            StatusCode::CONFLICT
        }
        LedgerError::BalanceOverflow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Handler error carrying a ledger error to the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        ApiError(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(LedgerError::invalid_argument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        debug!(status = status.as_u16(), error = %self.0, "request failed");
        (
            status,
            Json(json!({
                "error": self.0.code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
