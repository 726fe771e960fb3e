//! Resolver seams toward the user and item directories.
//!
//! The booking core never walks a live object graph; it consumes these two
//! narrow lookup capabilities and treats their failures as its own
//! (propagated unchanged to the caller).

use async_trait::async_trait;

use crate::error::BookingResult;
use crate::models::{ItemRecord, UserRecord};

/// Identity gate: resolves an acting user's id and verifies existence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user by id, failing with `NotFound` when absent.
    async fn resolve_user(&self, user_id: i64) -> BookingResult<UserRecord>;
}

/// Item/owner resolver: resolves the item being booked and its owner.
///
/// Resolved fresh per call; no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemDirectory: Send + Sync {
    /// Resolve an item by id, failing with `NotFound` when absent.
    async fn resolve_item(&self, item_id: i64) -> BookingResult<ItemRecord>;
}
