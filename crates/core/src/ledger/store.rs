//! In-memory ledger store.
//!
//! Each account lives in its own slot behind a `Mutex`. The `DashMap` is only
//! used to find a slot; every read-modify-write happens under the slot lock,
//! so operations on one account serialize while different accounts run in
//! parallel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use hsa_shared::types::{AccountId, Amount};

use super::account::Account;
use super::card::{Card, IssuedCard};
use super::decision::{DeclineReason, Decision};
use super::error::LedgerError;
use super::merchant::is_qualified_merchant;

/// One account and its current card.
#[derive(Debug)]
struct AccountSlot {
    account: Account,
    card: Option<Card>,
}

type SlotHandle = Arc<Mutex<AccountSlot>>;

/// Owns every account and card for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: DashMap<AccountId, SlotHandle>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account with a zero balance.
    pub fn open_account(&self, owner_name: impl Into<String>) -> Account {
        let account = Account::open(owner_name);
        let slot = AccountSlot {
            account: account.clone(),
            card: None,
        };
        self.accounts
            .insert(account.account_id.clone(), Arc::new(Mutex::new(slot)));
        account
    }

    /// Adds `amount` to the account balance.
    pub fn deposit(&self, account_id: &str, amount: Amount) -> Result<Account, LedgerError> {
        let handle = self.slot(account_id)?;
        let mut slot = lock(&handle);
        slot.account.credit(amount)?;
        Ok(slot.account.clone())
    }

    /// Issues a new virtual card, replacing any previous one.
    pub fn issue_card(&self, account_id: &str) -> Result<IssuedCard, LedgerError> {
        let handle = self.slot(account_id)?;
        let card = Card::issue(AccountId::from(account_id), &mut rand::rng());

        let mut slot = lock(&handle);
        slot.account.card_issued = true;
        slot.card = Some(card.clone());
        Ok(IssuedCard {
            card,
            account: slot.account.clone(),
        })
    }

    /// Validates a purchase and debits the balance if it is approved.
    ///
    /// Checks run in a fixed order: account exists, amount is positive,
    /// funds cover the amount, merchant is qualified. The first failing
    /// check decides the outcome.
    pub fn validate_transaction(
        &self,
        account_id: &str,
        amount: Amount,
        merchant: &str,
    ) -> Result<Decision, LedgerError> {
        let handle = self.slot(account_id)?;
        let mut slot = lock(&handle);

        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !slot.account.can_cover(amount) {
            return Ok(Decision::Declined(DeclineReason::InsufficientFunds));
        }
        if !is_qualified_merchant(merchant) {
            return Ok(Decision::Declined(DeclineReason::UnqualifiedMerchant(
                merchant.to_string(),
            )));
        }

        // Cannot underflow: balance >= amount > 0.
        let new_balance = slot
            .account
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        slot.account.balance = new_balance;
        Ok(Decision::Approved { new_balance })
    }

    /// Returns a snapshot of the account.
    pub fn account(&self, account_id: &str) -> Result<Account, LedgerError> {
        let handle = self.slot(account_id)?;
        let slot = lock(&handle);
        Ok(slot.account.clone())
    }

    /// Returns the account's current card.
    pub fn card(&self, account_id: &str) -> Result<Card, LedgerError> {
        let handle = self.slot(account_id)?;
        let slot = lock(&handle);
        slot.card
            .clone()
            .ok_or_else(|| LedgerError::CardNotFound(account_id.to_string()))
    }

    /// Number of accounts ever opened.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // The map guard is dropped before the slot is locked, so a slow slot
    // never holds a shard lock.
    fn slot(&self, account_id: &str) -> Result<SlotHandle, LedgerError> {
        self.accounts
            .get(account_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }
}

// Every mutation is a plain assignment after all checks pass, so a slot
// behind a poisoned lock is still consistent.
fn lock(handle: &SlotHandle) -> MutexGuard<'_, AccountSlot> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
