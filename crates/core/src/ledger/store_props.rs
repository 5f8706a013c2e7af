//! Property-based tests for the ledger store.
//!
//! - Balances never go negative
//! - Deposits are additive
//! - Unknown accounts are always reported as not found
//! - Overspending always declines with insufficient funds
//! - Unqualified merchants are declined by name when funds suffice

use hsa_shared::types::Amount;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::decision::{DeclineReason, Decision};
use super::error::LedgerError;
use super::merchant::QUALIFIED_MERCHANTS;
use super::store::Ledger;

/// Strategy to generate a positive amount (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Amount> {
    (1i64..1_000_000i64).prop_map(|cents| Amount::new(Decimal::new(cents, 2)))
}

/// Strategy to generate any amount, including zero and negatives.
fn any_amount() -> impl Strategy<Value = Amount> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Amount::new(Decimal::new(cents, 2)))
}

/// Strategy to generate a merchant name, qualified or not.
fn merchant() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(QUALIFIED_MERCHANTS.to_vec()).prop_map(str::to_string),
        "[A-Za-z ]{1,20}",
    ]
}

/// Strategy to generate a merchant name that is not on the allow-list.
fn unqualified_merchant() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,20}".prop_filter("must not be qualified", |m| {
        !QUALIFIED_MERCHANTS.contains(&m.as_str())
    })
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(Amount),
    Spend(Amount, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any_amount().prop_map(Op::Deposit),
        (any_amount(), merchant()).prop_map(|(a, m)| Op::Spend(a, m)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* sequence of deposits and transactions, the balance is never
    /// negative and always equals accepted deposits minus approved spends.
    #[test]
    fn prop_balance_never_negative(ops in prop::collection::vec(op(), 0..50)) {
        let ledger = Ledger::new();
        let id = ledger.open_account("prop").account_id;
        let mut expected = Decimal::ZERO;

        for op in ops {
            match op {
                Op::Deposit(amount) => {
                    if ledger.deposit(id.as_str(), amount).is_ok() {
                        expected += amount.value();
                    }
                }
                Op::Spend(amount, merchant) => {
                    if let Ok(Decision::Approved { .. }) =
                        ledger.validate_transaction(id.as_str(), amount, &merchant)
                    {
                        expected -= amount.value();
                    }
                }
            }
            let balance = ledger.account(id.as_str()).unwrap().balance;
            prop_assert!(!balance.is_negative(), "balance went negative: {}", balance);
            prop_assert_eq!(balance.value(), expected);
        }
    }

    /// *For any* two positive amounts, depositing them separately equals
    /// depositing their sum.
    #[test]
    fn prop_deposit_additive(a in positive_amount(), b in positive_amount()) {
        let ledger = Ledger::new();
        let split = ledger.open_account("split").account_id;
        let joined = ledger.open_account("joined").account_id;

        ledger.deposit(split.as_str(), a).unwrap();
        let split_balance = ledger.deposit(split.as_str(), b).unwrap().balance;
        let joined_balance = ledger
            .deposit(joined.as_str(), a.checked_add(b).unwrap())
            .unwrap()
            .balance;

        prop_assert_eq!(split_balance, joined_balance);
    }

    /// *For any* amount and merchant, an unknown account is not found.
    #[test]
    fn prop_unknown_account_not_found(
        suffix in "[a-z0-9]{0,12}",
        amount in any_amount(),
        merchant in merchant(),
    ) {
        let ledger = Ledger::new();
        ledger.open_account("someone else");
        let missing = format!("hsa-missing-{suffix}");

        let result = ledger.validate_transaction(&missing, amount, &merchant);
        prop_assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));
    }

    /// *For any* amount above the balance, the decline is insufficient funds,
    /// even at a qualified merchant.
    #[test]
    fn prop_overspend_declined(
        balance in positive_amount(),
        excess in positive_amount(),
        merchant in prop::sample::select(QUALIFIED_MERCHANTS.to_vec()),
    ) {
        let ledger = Ledger::new();
        let id = ledger.open_account("over").account_id;
        ledger.deposit(id.as_str(), balance).unwrap();

        let amount = balance.checked_add(excess).unwrap();
        let decision = ledger.validate_transaction(id.as_str(), amount, merchant).unwrap();

        prop_assert_eq!(decision, Decision::Declined(DeclineReason::InsufficientFunds));
        prop_assert_eq!(ledger.account(id.as_str()).unwrap().balance, balance);
    }

    /// *For any* unqualified merchant with sufficient funds, the decline
    /// names the merchant.
    #[test]
    fn prop_unqualified_merchant_named(
        amount in positive_amount(),
        merchant in unqualified_merchant(),
    ) {
        let ledger = Ledger::new();
        let id = ledger.open_account("merchant").account_id;
        ledger.deposit(id.as_str(), amount).unwrap();

        let decision = ledger.validate_transaction(id.as_str(), amount, &merchant).unwrap();

        prop_assert!(!decision.is_approved());
        prop_assert_eq!(
            decision.reason(),
            format!("{merchant} is not a qualified medical expense.")
        );
        prop_assert_eq!(ledger.account(id.as_str()).unwrap().balance, amount);
    }
}
