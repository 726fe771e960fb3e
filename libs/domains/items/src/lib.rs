//! Items Domain
//!
//! The item directory of the lendit service: listings an owner lends out,
//! their post-rental comments, and the booking-enriched projections. The
//! booking store is consulted read-only for the owner's last/next
//! annotations and for the finished-rental comment gate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Authorization, enrichment, comment gate
//! └──────┬──────┘
//!        │        ┌──────────────────┐
//!        ├───────►│ BookingRepository│  ← last/next, finished rentals
//!        │        └──────────────────┘
//! ┌──────▼──────┐
//! │ Repositories│  ← Items and comments (traits + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    Comment, CommentDto, CreateComment, CreateItem, Item, ItemDetails, NewComment, NewItem,
    UpdateItem,
};
pub use repository::{
    CommentRepository, InMemoryCommentRepository, InMemoryItemRepository, ItemRepository,
};
pub use service::ItemService;
