//! Query-string extractor with automatic validation using the validator crate.

use crate::extractors::validated_json::validation_rejection;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Deserializes the query string and validates it with the `validator`
/// crate's `Validate` trait, returning the same structured validation
/// errors as [`super::ValidatedJson`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct PageParams {
///     #[validate(range(min = 0))]
///     from: i64,
///     #[validate(range(min = 1))]
///     size: i64,
/// }
///
/// async fn list(ValidatedQuery(params): ValidatedQuery<PageParams>) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        data.validate().map_err(|e| validation_rejection(&e))?;

        Ok(ValidatedQuery(data))
    }
}
