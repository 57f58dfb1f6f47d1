//! Account-related types for the money transfer ledger
//!
//! This module defines the stored Account record and the request used
//! to create one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money;

/// Account identifier
///
/// Either supplied by the caller at creation or drawn from the store's counter.
pub type AccountId = u64;

/// Stored account state
///
/// The balance always carries exactly two fractional digits and is never
/// negative once an operation has committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,

    /// Current balance, rounded half-up to two decimal places
    pub balance: Decimal,
}

impl Account {
    /// Create an account with a zero balance (`0.00`)
    pub fn new(id: AccountId) -> Self {
        Account {
            id,
            balance: money::zero(),
        }
    }
}

/// Request to open an account
///
/// Both fields are optional: a missing id is assigned by the store and a
/// missing balance defaults to `0.00`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Caller-chosen identifier
    #[serde(default)]
    pub id: Option<AccountId>,

    /// Opening balance
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl NewAccount {
    /// Request an account with an explicit id
    pub fn with_id(id: AccountId) -> Self {
        NewAccount {
            id: Some(id),
            balance: None,
        }
    }

    /// Set the opening balance
    pub fn balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_has_zero_balance_with_two_digits() {
        let account = Account::new(7);

        assert_eq!(account.id, 7);
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.balance.to_string(), "0.00");
    }

    #[test]
    fn test_new_account_request_deserializes_empty_object() {
        let request: NewAccount = serde_json::from_str("{}").unwrap();

        assert_eq!(request, NewAccount::default());
    }

    #[test]
    fn test_new_account_request_builder() {
        let request = NewAccount::with_id(3).balance(dec!(100));

        assert_eq!(request.id, Some(3));
        assert_eq!(request.balance, Some(dec!(100)));
    }

    #[test]
    fn test_account_serializes_as_flat_object() {
        let account = Account {
            id: 1,
            balance: dec!(10.50),
        };

        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 1, "balance": "10.50" }));
    }
}
