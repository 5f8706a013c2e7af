//! Qualified medical merchants.

/// Merchants whose purchases count as qualified medical expenses.
pub const QUALIFIED_MERCHANTS: [&str; 3] = ["CVS Pharmacy", "Walgreens", "Doctor's Office"];

/// Returns true if `merchant` is on the allow-list.
///
/// Matching is exact and case-sensitive.
#[must_use]
pub fn is_qualified_merchant(merchant: &str) -> bool {
    QUALIFIED_MERCHANTS.contains(&merchant)
}
