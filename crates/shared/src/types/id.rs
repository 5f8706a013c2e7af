//! Opaque account identifiers.
//!
//! Identifiers are generated as `hsa-` followed by a random UUID v4. Clients
//! treat them as opaque strings, so any string can be looked up; unknown
//! values simply miss.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix carried by every generated account identifier.
pub const ACCOUNT_ID_PREFIX: &str = "hsa-";

/// Unique identifier for an HSA account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{ACCOUNT_ID_PREFIX}{}", Uuid::new_v4()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// Lets maps keyed by `AccountId` be queried with a plain `&str`.
impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
