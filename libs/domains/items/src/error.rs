use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_bookings::BookingError;
use thiserror::Error;

/// Failure taxonomy of the item subsystem. Unlike the booking flows, a
/// non-owner touching an item is told so plainly with `Forbidden`.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(msg) => AppError::NotFound(msg),
            ItemError::Forbidden(msg) => AppError::Forbidden(msg),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

/// Booking failures surfacing through the enrichment and comment-gate
/// queries keep their own taxonomy.
impl From<BookingError> for ItemError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(msg) => ItemError::NotFound(msg),
            BookingError::Validation(msg) => ItemError::Validation(msg),
            BookingError::Internal(msg) => ItemError::Internal(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
