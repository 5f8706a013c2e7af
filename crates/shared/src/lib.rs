//! Shared types, errors, and configuration for the HSA ledger.
//!
//! This crate provides common types used across all other crates:
//! - Opaque account identifiers
//! - Decimal money amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
