//! Money Transfer Ledger Library
//! # Overview
//!
//! This library keeps an in-memory ledger of accounts and executes transfers
//! between them under concurrent access, with balances held as two-digit
//! fixed-point decimals rounded half-up on every mutation.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transfer, errors, money rounding)
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account storage with a per-key atomic update primitive
//!   - [`core::transfer_store`] - Transfer records and transfer id allocation
//!   - [`core::engine`] - Transfer validation and debit/credit orchestration
//! - [`api`] - HTTP adapter (axum routes, error-to-status mapping)
//! - [`cli`] - Command-line and environment configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! # Transfer Lifecycle
//!
//! - **Registered**: validated, both accounts exist, record stored; money may not have moved yet
//! - **Performed**: source debited and destination credited
//!
//! A transfer whose debit or credit fails stays `Registered`.
//!
//! # Guarantees
//!
//! - No account balance is ever negative after a committed operation
//! - Concurrent updates to the same account never lose an update
//! - Account and transfer ids are never reused

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod types;

pub use crate::core::{AccountStore, InMemoryAccountStore, TransferEngine, TransferStore};
pub use types::{
    Account, AccountId, LedgerError, NewAccount, Transfer, TransferId, TransferRequest,
    TransferStatus,
};
