//! Account routes: open, deposit, and look up.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use hsa_core::ledger::Account;
use hsa_shared::types::Amount;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-account", post(create_account))
        .route("/deposit", post(deposit))
        .route("/accounts/{account_id}", get(get_account))
}

/// Request body for opening an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Owner display name. Missing or null means empty.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for a deposit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    /// Target account.
    pub account_id: String,
    /// Amount to add; must be positive.
    pub amount: Amount,
}

/// Response for an account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account ID.
    pub account_id: String,
    /// Owner display name.
    pub owner_name: String,
    /// Current balance, as a JSON number.
    pub balance: Amount,
    /// Whether a card has been issued.
    pub card_issued: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id.into_inner(),
            owner_name: account.owner_name,
            balance: account.balance,
            card_issued: account.card_issued,
        }
    }
}

/// POST `/create-account` - Open an account with a zero balance.
async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateAccountRequest>,
) -> (StatusCode, Json<AccountResponse>) {
    let account = state.ledger.open_account(req.name.unwrap_or_default());
    info!(account_id = %account.account_id, "Account created");
    (StatusCode::CREATED, Json(account.into()))
}

/// POST `/deposit` - Add funds to an account.
async fn deposit(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DepositRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    match state.ledger.deposit(&req.account_id, req.amount) {
        Ok(account) => {
            info!(
                account_id = %account.account_id,
                amount = %req.amount,
                balance = %account.balance,
                "Deposit applied"
            );
            Ok(Json(account.into()))
        }
        Err(e) => {
            warn!(account_id = %req.account_id, error = %e, "Deposit rejected");
            Err(e.into())
        }
    }
}

/// GET `/accounts/{account_id}` - Fetch an account.
async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.ledger.account(&account_id)?;
    Ok(Json(account.into()))
}
