//! HSA ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Account and card records
//! - Virtual card synthesis
//! - The qualified-merchant allow-list
//! - Transaction decisions (approve or decline)
//! - Error types for ledger operations
//! - The in-memory store with per-account locking

pub mod account;
pub mod card;
pub mod decision;
pub mod error;
pub mod merchant;
pub mod store;

#[cfg(test)]
mod store_props;

pub use account::Account;
pub use card::{Card, IssuedCard};
pub use decision::{DeclineReason, Decision};
pub use error::LedgerError;
pub use merchant::{QUALIFIED_MERCHANTS, is_qualified_merchant};
pub use store::Ledger;
