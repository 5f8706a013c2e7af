//! HSA account record.

use hsa_shared::types::{AccountId, Amount};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// An HSA account.
///
/// # Invariants
///
/// - `balance` is never negative
/// - once `card_issued` is true it stays true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier, `hsa-` prefixed.
    pub account_id: AccountId,
    /// Display name given at creation.
    pub owner_name: String,
    /// Current balance.
    pub balance: Amount,
    /// Whether a virtual card has ever been issued.
    pub card_issued: bool,
}

impl Account {
    /// Creates an empty account with a fresh identifier.
    #[must_use]
    pub fn open(owner_name: impl Into<String>) -> Self {
        Self {
            account_id: AccountId::generate(),
            owner_name: owner_name.into(),
            balance: Amount::ZERO,
            card_issued: false,
        }
    }

    /// Credits `amount` to the balance.
    ///
    /// The balance is left untouched on error.
    pub(crate) fn credit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(())
    }

    /// Returns true if the balance covers `amount`.
    #[must_use]
    pub fn can_cover(&self, amount: Amount) -> bool {
        self.balance >= amount
    }
}
