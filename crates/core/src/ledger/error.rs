//! Ledger error types.
//!
//! Declines are not errors; see [`super::Decision`].

use hsa_shared::{AppError, types::Amount};
use thiserror::Error;

/// Message used for every unknown account, kept verbatim for API clients.
pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No account with the given identifier.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The account exists but no card has been issued.
    #[error("No card issued for account {0}")]
    CardNotFound(String),

    /// Amount must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Amount),

    /// Balance would exceed the representable range.
    #[error("Balance overflow")]
    AmountOverflow,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::CardNotFound(_) => "CARD_NOT_FOUND",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::AccountNotFound(_) | Self::CardNotFound(_) => 404,
            Self::InvalidAmount(_) => 400,
            Self::AmountOverflow => 422,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) => Self::NotFound(ACCOUNT_NOT_FOUND.to_string()),
            LedgerError::CardNotFound(_) => Self::NotFound("Card not found".to_string()),
            LedgerError::InvalidAmount(_) => Self::Validation(err.to_string()),
            LedgerError::AmountOverflow => Self::BusinessRule(err.to_string()),
        }
    }
}
