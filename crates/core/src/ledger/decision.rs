//! Transaction decisions.
//!
//! A decline is an expected outcome, not an error. Only an unknown account
//! or an invalid amount are errors.

use std::fmt;

use hsa_shared::types::Amount;
use serde::Serialize;

/// Reason shown for an approved transaction.
pub const APPROVED_REASON: &str = "Transaction approved!";

/// Why a transaction was declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DeclineReason {
    /// The balance does not cover the amount.
    InsufficientFunds,
    /// The merchant is not on the qualified list.
    UnqualifiedMerchant(String),
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds => f.write_str("Insufficient funds"),
            Self::UnqualifiedMerchant(merchant) => {
                write!(f, "{merchant} is not a qualified medical expense.")
            }
        }
    }
}

/// Outcome of validating a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// The amount was debited.
    Approved {
        /// Balance after the debit.
        new_balance: Amount,
    },
    /// Nothing changed.
    Declined(DeclineReason),
}

impl Decision {
    /// Returns true for an approval.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Approved { .. } => APPROVED_REASON.to_string(),
            Self::Declined(reason) => reason.to_string(),
        }
    }

    /// Balance after the debit, if approved.
    #[must_use]
    pub fn new_balance(&self) -> Option<Amount> {
        match self {
            Self::Approved { new_balance } => Some(*new_balance),
            Self::Declined(_) => None,
        }
    }
}
