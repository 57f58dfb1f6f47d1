//! Core traits for account storage
//!
//! The transfer engine only talks to accounts through [`AccountStore`], so any
//! store that honors the per-key atomicity contract can sit underneath it.

use crate::types::{Account, AccountId, LedgerError, NewAccount};

/// Keyed account storage with an atomic per-key transform
///
/// Implementations must make `create` and `atomic_update` linearizable per
/// account id without serializing unrelated ids behind one lock.
pub trait AccountStore: Send + Sync {
    /// Store a new account, assigning an id and a `0.00` balance when missing
    fn create(&self, requested: impl Into<Option<NewAccount>>) -> Result<Account, LedgerError>;

    /// Snapshot of the account stored under `id`
    fn lookup(&self, id: impl Into<Option<AccountId>>) -> Result<Account, LedgerError>;

    /// Replace the account under `id` with the result of `transform`
    ///
    /// A missing id is a silent no-op and `transform` is never called. An error
    /// from `transform` is returned and the stored account is left as it was.
    fn atomic_update<F>(&self, id: AccountId, transform: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&Account) -> Result<Account, LedgerError>;

    /// Snapshot of every stored account, in no particular order
    fn all_accounts(&self) -> Vec<Account>;
}
