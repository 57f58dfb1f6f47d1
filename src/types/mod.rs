//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records and creation requests
//! - `transfer`: Transfer records, requests and status
//! - `money`: Balance scale and half-up rounding
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod money;
pub mod transfer;

pub use account::{Account, AccountId, NewAccount};
pub use error::LedgerError;
pub use transfer::{Transfer, TransferId, TransferRequest, TransferStatus};
