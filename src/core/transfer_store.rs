//! Thread-safe transfer record storage
//!
//! This module provides the `TransferStore` struct, which owns every transfer
//! record and hands out transfer ids.
//!
//! # Design
//!
//! Records live in a `DashMap` keyed by transfer id, so registering one
//! transfer and finalizing another never contend unless they share a shard.
//! The id counter is an `AtomicU64` independent of the map; ids are never
//! reused. This map is separate from the account map and no operation spans
//! both.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::types::{AccountId, LedgerError, Transfer, TransferId, TransferStatus};

/// Concurrent transfer store backed by `DashMap`
#[derive(Debug, Default)]
pub struct TransferStore {
    /// Transfer records keyed by id
    transfers: DashMap<TransferId, Transfer>,

    /// Last transfer id handed out
    last_id: AtomicU64,
}

impl TransferStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            transfers: DashMap::new(),
            last_id: AtomicU64::new(0),
        }
    }

    /// Record a new transfer in the `Registered` state
    ///
    /// Assigns the next transfer id and stamps the current time. The record is
    /// visible to [`TransferStore::get`] as soon as this returns.
    pub fn register(&self, from: AccountId, to: AccountId, amount: Decimal) -> Transfer {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        let transfer = Transfer {
            id,
            from_account_id: from,
            to_account_id: to,
            amount,
            status: TransferStatus::Registered,
            timestamp: Utc::now(),
        };
        self.transfers.insert(id, transfer.clone());
        transfer
    }

    /// Update a transfer in place under its key lock
    ///
    /// Returns the record as it stands after `f` ran. The closure's error is
    /// returned as is.
    pub fn update<F>(&self, id: TransferId, f: F) -> Result<Transfer, LedgerError>
    where
        F: FnOnce(&mut Transfer) -> Result<(), LedgerError>,
    {
        match self.transfers.get_mut(&id) {
            Some(mut entry) => {
                f(entry.value_mut())?;
                Ok(entry.value().clone())
            }
            None => Err(LedgerError::transfer_not_found(id)),
        }
    }

    /// Snapshot of a single transfer
    pub fn get(&self, id: TransferId) -> Option<Transfer> {
        self.transfers.get(&id).map(|entry| entry.value().clone())
    }

    /// Snapshot of every transfer, ordered by id
    pub fn all(&self) -> Vec<Transfer> {
        let mut transfers: Vec<Transfer> = self
            .transfers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transfers.sort_by_key(|transfer| transfer.id);
        transfers
    }

    /// Number of stored transfers
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Whether no transfer has been registered
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_register_assigns_increasing_ids() {
        let store = TransferStore::new();

        let first = store.register(1, 2, dec!(1));
        let second = store.register(2, 1, dec!(2));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, TransferStatus::Registered);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_registered_transfer_is_visible() {
        let store = TransferStore::new();

        let transfer = store.register(1, 2, dec!(10.004));

        assert_eq!(store.get(transfer.id), Some(transfer));
    }

    #[test]
    fn test_get_nonexistent_transfer() {
        let store = TransferStore::new();
        assert!(store.get(999).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_changes_status() {
        let store = TransferStore::new();
        let transfer = store.register(1, 2, dec!(1));

        let updated = store
            .update(transfer.id, |transfer| {
                transfer.status = TransferStatus::Performed;
                Ok(())
            })
            .unwrap();

        assert_eq!(updated.status, TransferStatus::Performed);
        assert_eq!(
            store.get(transfer.id).unwrap().status,
            TransferStatus::Performed
        );
    }

    #[test]
    fn test_update_nonexistent_transfer() {
        let store = TransferStore::new();

        let result = store.update(999, |transfer| {
            transfer.status = TransferStatus::Performed;
            Ok(())
        });

        assert_eq!(result, Err(LedgerError::transfer_not_found(999)));
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let store = TransferStore::new();
        for _ in 0..5 {
            store.register(1, 2, dec!(1));
        }

        let ids: Vec<TransferId> = store.all().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_concurrent_register_never_reuses_ids() {
        let store = Arc::new(TransferStore::new());
        let mut handles = vec![];

        for _ in 0..32 {
            let store_clone = Arc::clone(&store);
            handles.push(thread::spawn(move || store_clone.register(1, 2, dec!(1)).id));
        }

        let mut ids: Vec<TransferId> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(store.len(), 32);
    }
}
