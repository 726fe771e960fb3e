use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failure taxonomy of the booking subsystem.
///
/// `NotFound` covers unknown entities and the authorization failures this
/// service deliberately surfaces as not-found (owner booking own item,
/// non-owner approving, non-participant viewing), so a caller cannot
/// distinguish "does not exist" from "not yours to see". `Validation`
/// means the request was understood and rejected; retrying unmodified will
/// not help.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Convert BookingError to AppError for standardized error responses
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(msg) => AppError::NotFound(msg),
            BookingError::Validation(msg) => AppError::BadRequest(msg),
            BookingError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
