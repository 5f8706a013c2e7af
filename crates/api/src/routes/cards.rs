//! Virtual card routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use hsa_core::ledger::{Card, IssuedCard};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::accounts::AccountResponse;
use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the card routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/issue-card", post(issue_card))
        .route("/accounts/{account_id}/card", get(get_card))
}

/// Request body for issuing a card.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    /// Account to issue the card against.
    pub account_id: String,
}

/// Response for a card.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    /// Four groups of four digits.
    pub card_number: String,
    /// Card verification value.
    pub cvv: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// Owning account ID.
    pub linked_account: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            card_number: card.card_number,
            cvv: card.cvv,
            expiry: card.expiry,
            linked_account: card.linked_account.into_inner(),
        }
    }
}

/// Response for a freshly issued card.
#[derive(Debug, Serialize)]
pub struct IssueCardResponse {
    /// The new card.
    pub card: CardResponse,
    /// The account with `card_issued` set.
    pub account: AccountResponse,
}

impl From<IssuedCard> for IssueCardResponse {
    fn from(issued: IssuedCard) -> Self {
        Self {
            card: issued.card.into(),
            account: issued.account.into(),
        }
    }
}

/// POST `/issue-card` - Issue (or re-issue) a virtual card.
async fn issue_card(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IssueCardRequest>,
) -> Result<Json<IssueCardResponse>, ApiError> {
    match state.ledger.issue_card(&req.account_id) {
        Ok(issued) => {
            info!(account_id = %req.account_id, "Card issued");
            Ok(Json(issued.into()))
        }
        Err(e) => {
            warn!(account_id = %req.account_id, error = %e, "Card issue rejected");
            Err(e.into())
        }
    }
}

/// GET `/accounts/{account_id}/card` - Fetch the current card.
async fn get_card(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<CardResponse>, ApiError> {
    let card = state.ledger.card(&account_id)?;
    Ok(Json(card.into()))
}
