//! Core business logic for the HSA ledger.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Account and card records, the transaction decision sequence, and the
//! in-memory store all live here.
//!
//! # Modules
//!
//! - `ledger` - Accounts, cards, deposits, and transaction validation

pub mod ledger;
