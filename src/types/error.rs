//! Error types for the money transfer ledger
//!
//! Every failure the core can report is a [`LedgerError`]. None of them are
//! retried by the core; a failed operation leaves the store unchanged except
//! for the documented partial-transfer case (debit applied, credit failed).
//!
//! # Error Categories
//!
//! - **Caller input**: missing or malformed arguments, invalid transfer requests
//! - **Lookup**: unknown account or transfer ids
//! - **State conflicts**: duplicate account ids, insufficient balance
//! - **Arithmetic**: a balance leaving the representable decimal range

use rust_decimal::Decimal;
use thiserror::Error;

use super::account::AccountId;
use super::transfer::TransferId;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Missing or malformed caller input (no state change)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// Semantically invalid transfer request (no state change)
    #[error("Invalid transfer: {message}")]
    TransferValidation {
        /// Which validation rule failed
        message: String,
    },

    /// No account stored under the id
    #[error("Account {id} does not exist")]
    AccountNotFound {
        /// Requested account id
        id: AccountId,
    },

    /// No transfer stored under the id
    #[error("Transfer {id} does not exist")]
    TransferNotFound {
        /// Requested transfer id
        id: TransferId,
    },

    /// An account with this id already exists
    #[error("Account {id} already exists")]
    DuplicateAccount {
        /// Conflicting account id
        id: AccountId,
    },

    /// A debit would take the balance below zero
    ///
    /// The source account is left unchanged.
    #[error("Account {id} does not have enough balance: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Debited account id
        id: AccountId,
        /// Balance at the time of the debit
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// A balance mutation left the representable decimal range
    #[error("Balance overflow in {operation} for account {id}")]
    BalanceOverflow {
        /// Account whose balance could not be updated
        id: AccountId,
        /// Operation that overflowed ("debit" or "credit")
        operation: String,
    },
}

impl LedgerError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LedgerError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a TransferValidation error
    pub fn transfer_validation(message: impl Into<String>) -> Self {
        LedgerError::TransferValidation {
            message: message.into(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: AccountId) -> Self {
        LedgerError::AccountNotFound { id }
    }

    /// Create a TransferNotFound error
    pub fn transfer_not_found(id: TransferId) -> Self {
        LedgerError::TransferNotFound { id }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(id: AccountId) -> Self {
        LedgerError::DuplicateAccount { id }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(id: AccountId, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            id,
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(id: AccountId, operation: &str) -> Self {
        LedgerError::BalanceOverflow {
            id,
            operation: operation.to_string(),
        }
    }

    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidArgument { .. } => "invalid_argument",
            LedgerError::TransferValidation { .. } => "transfer_validation",
            LedgerError::AccountNotFound { .. } => "account_not_found",
            LedgerError::TransferNotFound { .. } => "transfer_not_found",
            LedgerError::DuplicateAccount { .. } => "duplicate_account",
            LedgerError::InsufficientBalance { .. } => "insufficient_balance",
            LedgerError::BalanceOverflow { .. } => "balance_overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::invalid_argument(
        LedgerError::invalid_argument("Account number needed"),
        "Invalid argument: Account number needed"
    )]
    #[case::transfer_validation(
        LedgerError::transfer_validation("amount must be greater than 0"),
        "Invalid transfer: amount must be greater than 0"
    )]
    #[case::account_not_found(LedgerError::account_not_found(42), "Account 42 does not exist")]
    #[case::transfer_not_found(LedgerError::transfer_not_found(9), "Transfer 9 does not exist")]
    #[case::duplicate_account(LedgerError::duplicate_account(1), "Account 1 already exists")]
    #[case::insufficient_balance(
        LedgerError::insufficient_balance(1, dec!(10.00), dec!(20.00)),
        "Account 1 does not have enough balance: balance 10.00, requested 20.00"
    )]
    #[case::balance_overflow(
        LedgerError::balance_overflow(2, "credit"),
        "Balance overflow in credit for account 2"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_argument(LedgerError::invalid_argument("x"), "invalid_argument")]
    #[case::transfer_validation(LedgerError::transfer_validation("x"), "transfer_validation")]
    #[case::account_not_found(LedgerError::account_not_found(1), "account_not_found")]
    #[case::transfer_not_found(LedgerError::transfer_not_found(1), "transfer_not_found")]
    #[case::duplicate_account(LedgerError::duplicate_account(1), "duplicate_account")]
    #[case::insufficient_balance(
        LedgerError::insufficient_balance(1, dec!(0), dec!(1)),
        "insufficient_balance"
    )]
    #[case::balance_overflow(LedgerError::balance_overflow(1, "debit"), "balance_overflow")]
    fn test_error_codes(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn test_helper_functions() {
        assert_eq!(
            LedgerError::balance_overflow(3, "debit"),
            LedgerError::BalanceOverflow {
                id: 3,
                operation: "debit".to_string()
            }
        );
        assert_eq!(
            LedgerError::invalid_argument("missing"),
            LedgerError::InvalidArgument {
                message: "missing".to_string()
            }
        );
    }
}
