//! Virtual card synthesis.
//!
//! Cards are display-only: a random 16-digit number grouped in fours, plus a
//! fixed CVV and expiry.

use hsa_shared::types::AccountId;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::account::Account;

/// CVV printed on every issued card.
pub const CARD_CVV: &str = "123";

/// Expiry printed on every issued card.
pub const CARD_EXPIRY: &str = "12/29";

const GROUPS: usize = 4;
const DIGITS_PER_GROUP: usize = 4;

/// A virtual card linked to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Four space-separated groups of four digits.
    pub card_number: String,
    /// Card verification value.
    pub cvv: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// The account this card draws on.
    pub linked_account: AccountId,
}

impl Card {
    /// Synthesizes a card for `account_id` using `rng` for the number.
    pub fn issue<R: Rng + ?Sized>(account_id: AccountId, rng: &mut R) -> Self {
        Self {
            card_number: generate_card_number(rng),
            cvv: CARD_CVV.to_string(),
            expiry: CARD_EXPIRY.to_string(),
            linked_account: account_id,
        }
    }
}

/// Result of issuing a card: the new card and the updated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCard {
    /// The freshly issued card.
    pub card: Card,
    /// The account after `card_issued` was set.
    pub account: Account,
}

/// Generates a card number of the form `dddd dddd dddd dddd`.
pub fn generate_card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = String::with_capacity(GROUPS * (DIGITS_PER_GROUP + 1));
    for group in 0..GROUPS {
        if group > 0 {
            number.push(' ');
        }
        for _ in 0..DIGITS_PER_GROUP {
            let digit: u8 = rng.random_range(0..10);
            number.push(char::from(b'0' + digit));
        }
    }
    number
}
