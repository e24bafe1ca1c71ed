//! JSON body extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `validator` rules after decoding.
///
/// Decoding failures keep the status chosen by axum's [`JsonRejection`]
/// (400 for syntax, 415 for a missing content type, 422 for type
/// mismatches). Rule violations are 400 with per-field `details`.
///
/// [`JsonRejection`]: axum::extract::rejection::JsonRejection
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct ItemInput {
///     #[serde(default)]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<ItemInput>) -> String {
///     input.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
