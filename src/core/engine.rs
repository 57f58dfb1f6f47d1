//! Transfer processing engine
//!
//! This module provides the `TransferEngine`, which validates transfer requests
//! and moves money between accounts through an [`AccountStore`].
//!
//! # Processing order
//!
//! ```text
//! validate ─▶ lookup(from), lookup(to) ─▶ register (Registered)
//!          ─▶ atomic_update(from, debit) ─▶ atomic_update(to, credit)
//!          ─▶ finalize (Performed)
//! ```
//!
//! The debit and the credit are two independent per-key atomic updates; no
//! lock is held across both accounts. If the credit fails after the debit
//! committed, the source stays debited and the transfer stays `Registered`.
//! Nothing compensates automatically; the caller sees the error.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::account_store::InMemoryAccountStore;
use super::traits::AccountStore;
use super::transfer_store::TransferStore;
use crate::types::{
    money, Account, AccountId, LedgerError, Transfer, TransferId, TransferRequest, TransferStatus,
};

/// Validated fields of a transfer request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ValidTransfer {
    from: AccountId,
    to: AccountId,
    amount: Decimal,
}

/// Transfer orchestrator
///
/// Owns the transfer records and shares the account store with whoever else
/// needs it (the HTTP adapter reads and creates accounts through the same
/// `Arc`). Safe to share across threads behind an `Arc`.
#[derive(Debug)]
pub struct TransferEngine<S = InMemoryAccountStore> {
    accounts: Arc<S>,
    transfers: TransferStore,
}

impl<S: AccountStore> TransferEngine<S> {
    /// Create an engine with no transfers over the given account store
    pub fn new(accounts: Arc<S>) -> Self {
        Self {
            accounts,
            transfers: TransferStore::new(),
        }
    }

    /// The account store this engine debits and credits
    pub fn accounts(&self) -> &Arc<S> {
        &self.accounts
    }

    /// Validate, register and perform a transfer
    ///
    /// # Returns
    ///
    /// The stored transfer in the `Performed` state.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if no request is given
    /// - `TransferValidation` if a field is missing, both accounts are the same
    ///   or the amount is not positive (nothing is stored)
    /// - `AccountNotFound` if either account does not exist (nothing is stored)
    /// - `InsufficientBalance` if the rounded debit would go negative; the
    ///   transfer stays `Registered` and no balance changes
    /// - any error of the credit step; the source stays debited and the
    ///   transfer stays `Registered`
    pub fn create_and_perform(
        &self,
        request: impl Into<Option<TransferRequest>>,
    ) -> Result<Transfer, LedgerError> {
        let ValidTransfer { from, to, amount } = validate(request.into())?;

        let from = self.accounts.lookup(from)?.id;
        let to = self.accounts.lookup(to)?.id;

        let registered = self.transfers.register(from, to, amount);
        debug!(transfer = registered.id, from, to, %amount, "transfer registered");

        if let Err(error) = self.accounts.atomic_update(from, debit(amount)) {
            warn!(transfer = registered.id, %error, "debit failed, transfer left registered");
            return Err(error);
        }
        if let Err(error) = self.accounts.atomic_update(to, credit(amount)) {
            warn!(
                transfer = registered.id,
                %error,
                "credit failed after debit, transfer left registered"
            );
            return Err(error);
        }

        let performed = self.transfers.update(registered.id, |transfer| {
            transfer.status = TransferStatus::Performed;
            Ok(())
        })?;
        info!(transfer = performed.id, from, to, %amount, "transfer performed");
        Ok(performed)
    }

    /// Look up a transfer by id
    pub fn transfer(&self, id: TransferId) -> Result<Transfer, LedgerError> {
        self.transfers
            .get(id)
            .ok_or_else(|| LedgerError::transfer_not_found(id))
    }

    /// Every transfer ever registered, ordered by id
    pub fn all_transfers(&self) -> Vec<Transfer> {
        self.transfers.all()
    }
}

fn validate(request: Option<TransferRequest>) -> Result<ValidTransfer, LedgerError> {
    let request = request.ok_or_else(|| LedgerError::invalid_argument("transfer needed"))?;

    let from = request
        .from_account_id
        .ok_or_else(|| LedgerError::transfer_validation("fromAccountId needed"))?;
    let to = request
        .to_account_id
        .ok_or_else(|| LedgerError::transfer_validation("toAccountId needed"))?;
    let amount = request
        .amount
        .ok_or_else(|| LedgerError::transfer_validation("amount needed"))?;

    if from == to {
        return Err(LedgerError::transfer_validation(
            "cannot transfer to the same account",
        ));
    }
    if amount <= Decimal::ZERO {
        return Err(LedgerError::transfer_validation(
            "amount must be greater than 0",
        ));
    }

    Ok(ValidTransfer { from, to, amount })
}

/// Transform subtracting `amount`, rounded half-up, refusing a negative result
fn debit(amount: Decimal) -> impl FnOnce(&Account) -> Result<Account, LedgerError> {
    move |account| {
        let balance = account
            .balance
            .checked_sub(amount)
            .map(money::round_half_up)
            .ok_or_else(|| LedgerError::balance_overflow(account.id, "debit"))?;

        if balance < Decimal::ZERO {
            return Err(LedgerError::insufficient_balance(
                account.id,
                account.balance,
                amount,
            ));
        }

        Ok(Account {
            id: account.id,
            balance,
        })
    }
}

/// Transform adding `amount`, rounded half-up
fn credit(amount: Decimal) -> impl FnOnce(&Account) -> Result<Account, LedgerError> {
    move |account| {
        let balance = account
            .balance
            .checked_add(amount)
            .map(money::round_half_up)
            .ok_or_else(|| LedgerError::balance_overflow(account.id, "credit"))?;

        Ok(Account {
            id: account.id,
            balance,
        })
    }
}
