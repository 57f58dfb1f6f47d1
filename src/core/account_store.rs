//! Thread-safe in-memory account storage
//!
//! This module provides the `InMemoryAccountStore` struct, the only component
//! allowed to change an account balance.
//!
//! # Design
//!
//! Accounts live in a `DashMap`, whose sharded locks give per-key mutual
//! exclusion: a read-modify-write on one account holds that account's shard
//! for the duration of the transform, while accounts on other shards proceed
//! in parallel. Ids come from an `AtomicU64` kept outside the map.
//!
//! # Thread Safety
//!
//! A `DashMap` guard is never held across a call back into the store, so no
//! operation here can deadlock against another.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use super::traits::AccountStore;
use crate::types::{money, Account, AccountId, LedgerError, NewAccount};

/// Concurrent account store backed by `DashMap`
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    /// Account records keyed by id
    accounts: DashMap<AccountId, Account>,

    /// Last id handed out by the counter
    ///
    /// Values are consumed even when the candidate id turns out to be taken.
    last_id: AtomicU64,
}

impl InMemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            last_id: AtomicU64::new(0),
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been created yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn next_id(&self) -> AccountId {
        self.last_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn opening_balance(balance: Option<Decimal>) -> Result<Decimal, LedgerError> {
        match balance {
            None => Ok(money::zero()),
            Some(balance) if balance.is_sign_negative() && !balance.is_zero() => Err(
                LedgerError::invalid_argument(format!("balance must not be negative, got {balance}")),
            ),
            Some(balance) => Ok(money::round_half_up(balance)),
        }
    }

    /// Insert under a caller-chosen id; the entry API makes check-and-insert one step
    fn insert_with_id(&self, id: AccountId, balance: Decimal) -> Result<Account, LedgerError> {
        match self.accounts.entry(id) {
            Entry::Occupied(_) => Err(LedgerError::duplicate_account(id)),
            Entry::Vacant(vacant) => {
                let account = Account { id, balance };
                vacant.insert(account.clone());
                Ok(account)
            }
        }
    }

    /// Insert under the next free counter value
    fn insert_with_generated_id(&self, balance: Decimal) -> Account {
        loop {
            let id = self.next_id();
            match self.accounts.entry(id) {
                // Taken by a caller-supplied id; skip it.
                Entry::Occupied(_) => continue,
                Entry::Vacant(vacant) => {
                    let account = Account { id, balance };
                    vacant.insert(account.clone());
                    return account;
                }
            }
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, requested: impl Into<Option<NewAccount>>) -> Result<Account, LedgerError> {
        let requested = requested
            .into()
            .ok_or_else(|| LedgerError::invalid_argument("account needed"))?;
        let balance = Self::opening_balance(requested.balance)?;

        let account = match requested.id {
            Some(id) => self.insert_with_id(id, balance)?,
            None => self.insert_with_generated_id(balance),
        };
        debug!(account = account.id, balance = %account.balance, "account created");
        Ok(account)
    }

    fn lookup(&self, id: impl Into<Option<AccountId>>) -> Result<Account, LedgerError> {
        let id = id
            .into()
            .ok_or_else(|| LedgerError::invalid_argument("account id needed"))?;
        self.accounts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn atomic_update<F>(&self, id: AccountId, transform: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&Account) -> Result<Account, LedgerError>,
    {
        let Some(mut entry) = self.accounts.get_mut(&id) else {
            debug!(account = id, "update skipped, account does not exist");
            return Ok(());
        };

        let mut updated = transform(entry.value())?;
        updated.id = id;
        *entry.value_mut() = updated;
        Ok(())
    }

    fn all_accounts(&self) -> Vec<Account> {
        self.accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
