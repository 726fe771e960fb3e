//! Bookings Domain
//!
//! The booking lifecycle and availability-query engine of the lendit
//! service: creation validation, the approval/rejection state machine,
//! and the temporal bucket queries over a renter's or an owner's bookings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← State machine, temporal query engine
//! └──────┬──────┘
//!        │        ┌──────────────┐
//!        ├───────►│ Directories  │  ← user / item resolver seams
//!        │        └──────────────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_bookings::{
//!     handlers,
//!     repository::InMemoryBookingRepository,
//!     service::BookingService,
//! };
//! use std::sync::Arc;
//!
//! // users / items implement the directory traits over their own stores
//! let repository = Arc::new(InMemoryBookingRepository::new());
//! let service = BookingService::new(repository, users, items);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod directory;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use directory::{ItemDirectory, UserDirectory};
pub use error::{BookingError, BookingResult};
pub use handlers::ApiDoc;
pub use models::{
    BookedItem, Booking, BookingDto, BookingInfo, BookingStatus, CreateBooking, ItemRecord,
    ListParams, NewBooking, PageWindow, StateFilter, UserRecord, Viewpoint,
};
pub use repository::{BookingRepository, InMemoryBookingRepository};
pub use service::BookingService;
