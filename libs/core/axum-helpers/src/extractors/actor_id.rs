//! Acting-user header extractor.

use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Header carrying the id of the acting user on every request.
pub const ACTOR_HEADER: &str = "X-Sharer-User-Id";

/// Extractor for the acting user's id.
///
/// Reads the `X-Sharer-User-Id` header and parses it as a positive `i64`,
/// returning a 400 response when the header is missing or malformed. The
/// extracted id identifies the caller only; existence is verified by the
/// domain layer.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ActorId;
///
/// async fn list_bookings(ActorId(user_id): ActorId) -> String {
///     format!("Bookings for user {}", user_id)
/// }
/// ```
pub struct ActorId(pub i64);

impl<S> FromRequestParts<S> for ActorId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ACTOR_HEADER)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Missing {} header", ACTOR_HEADER)).into_response()
            })?
            .to_str()
            .map_err(|_| {
                AppError::BadRequest(format!("Invalid {} header", ACTOR_HEADER)).into_response()
            })?;

        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(ActorId(id)),
            _ => Err(
                AppError::BadRequest(format!("Invalid {} header: {}", ACTOR_HEADER, value))
                    .into_response(),
            ),
        }
    }
}
