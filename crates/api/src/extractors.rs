//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use hsa_shared::AppError;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// JSON body extractor whose rejections become `400 VALIDATION_ERROR`.
///
/// Axum's own `Json` answers 415/422 with a plain-text body; clients of this
/// API always get the JSON error shape instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = rejection.body_text();
                debug!(error = %message, "Rejected request body");
                Err(AppError::Validation(message).into())
            }
        }
    }
}
