//! Transfer-related types for the money transfer ledger
//!
//! This module defines the transfer request accepted from callers, the stored
//! transfer record and its lifecycle status.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Transfer identifier
///
/// Assigned from a monotonically increasing counter when the transfer is
/// registered. Never reused.
pub type TransferId = u64;

/// Lifecycle of a stored transfer
///
/// A transfer moves from `Registered` to `Performed` exactly once. A transfer
/// whose debit or credit step failed stays `Registered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    /// Recorded, but the debit and credit have not both been applied
    Registered,

    /// Both legs applied
    Performed,
}

/// Caller request to move money between two accounts
///
/// Every field is optional at this level so that a missing field can be
/// reported as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Account to debit
    #[serde(default)]
    pub from_account_id: Option<AccountId>,

    /// Account to credit
    #[serde(default)]
    pub to_account_id: Option<AccountId>,

    /// Amount to move, at full caller precision
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl TransferRequest {
    /// Build a request with every field present
    pub fn new(from: AccountId, to: AccountId, amount: Decimal) -> Self {
        TransferRequest {
            from_account_id: Some(from),
            to_account_id: Some(to),
            amount: Some(amount),
        }
    }
}

/// Stored transfer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Unique transfer identifier
    pub id: TransferId,

    /// Debited account
    pub from_account_id: AccountId,

    /// Credited account
    pub to_account_id: AccountId,

    /// Requested amount (not rounded)
    pub amount: Decimal,

    /// Current lifecycle state
    pub status: TransferStatus,

    /// Registration time
    pub timestamp: DateTime<Utc>,
}
