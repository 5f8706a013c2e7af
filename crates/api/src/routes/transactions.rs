//! Transaction validation route.
//!
//! Declines are normal `200` responses with `approved: false`. Only an
//! unknown account answers `404`, and it keeps the decision shape.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use hsa_core::ledger::{Decision, LedgerError, error::ACCOUNT_NOT_FOUND};
use hsa_shared::types::Amount;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/validate-transaction", post(validate_transaction))
}

/// Request body for validating a purchase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTransactionRequest {
    /// Account to charge.
    pub account_id: String,
    /// Purchase amount; must be positive.
    pub amount: Amount,
    /// Merchant name, matched exactly against the qualified list.
    pub merchant: String,
}

/// Response for a transaction decision.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Whether the amount was debited.
    pub approved: bool,
    /// Human-readable reason.
    pub reason: String,
    /// Balance after the debit, present only when approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<Amount>,
}

impl From<Decision> for TransactionResponse {
    fn from(decision: Decision) -> Self {
        Self {
            approved: decision.is_approved(),
            reason: decision.reason(),
            new_balance: decision.new_balance(),
        }
    }
}

impl TransactionResponse {
    fn account_not_found() -> Self {
        Self {
            approved: false,
            reason: ACCOUNT_NOT_FOUND.to_string(),
            new_balance: None,
        }
    }
}

/// POST `/validate-transaction` - Approve or decline a purchase.
async fn validate_transaction(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ValidateTransactionRequest>,
) -> Response {
    match state
        .ledger
        .validate_transaction(&req.account_id, req.amount, &req.merchant)
    {
        Ok(decision) => {
            if let Decision::Approved { new_balance } = &decision {
                info!(
                    account_id = %req.account_id,
                    amount = %req.amount,
                    merchant = %req.merchant,
                    new_balance = %new_balance,
                    "Transaction approved"
                );
            } else {
                warn!(
                    account_id = %req.account_id,
                    amount = %req.amount,
                    merchant = %req.merchant,
                    reason = %decision.reason(),
                    "Transaction declined"
                );
            }
            Json(TransactionResponse::from(decision)).into_response()
        }
        Err(LedgerError::AccountNotFound(_)) => {
            warn!(account_id = %req.account_id, "Transaction for unknown account");
            (
                StatusCode::NOT_FOUND,
                Json(TransactionResponse::account_not_found()),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
