//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the lendit HTTP services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (actor header, id path, validated JSON/query)
//! - **[`health`]**: Liveness endpoint

pub mod errors;
pub mod extractors;
pub mod health;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{ActorId, IdPath, ValidatedJson, ValidatedQuery};

// Re-export health router
pub use health::health_router;
