//! Shared fixtures for the bookings domain tests: in-memory directory
//! stubs standing in for the user and item stores.

// Each test binary compiles this module on its own and uses a subset.
#![allow(dead_code)]

use async_trait::async_trait;
use domain_bookings::{
    BookingError, BookingResult, InMemoryBookingRepository, ItemDirectory, ItemRecord,
    UserDirectory, UserRecord,
};
use domain_bookings::service::BookingService;
use std::collections::HashMap;
use std::sync::Arc;

pub struct StubUsers {
    users: HashMap<i64, UserRecord>,
}

impl StubUsers {
    pub fn with_ids(ids: &[i64]) -> Self {
        let users = ids
            .iter()
            .map(|&id| {
                (
                    id,
                    UserRecord {
                        id,
                        name: format!("user-{}", id),
                        email: format!("user{}@example.com", id),
                    },
                )
            })
            .collect();
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for StubUsers {
    async fn resolve_user(&self, user_id: i64) -> BookingResult<UserRecord> {
        self.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("User with ID: {} not found", user_id)))
    }
}

pub struct StubItems {
    items: HashMap<i64, ItemRecord>,
}

impl StubItems {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self {
            items: items.into_iter().map(|i| (i.id, i)).collect(),
        }
    }
}

#[async_trait]
impl ItemDirectory for StubItems {
    async fn resolve_item(&self, item_id: i64) -> BookingResult<ItemRecord> {
        self.items
            .get(&item_id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("Item with ID: {} not found", item_id)))
    }
}

pub fn item(id: i64, owner_id: i64, available: bool) -> ItemRecord {
    ItemRecord {
        id,
        name: format!("item-{}", id),
        owner_id,
        available,
    }
}

pub type TestService = BookingService<InMemoryBookingRepository, StubUsers, StubItems>;

/// A booking service over fresh in-memory storage, with the given users
/// and items known to the directories.
pub fn service(user_ids: &[i64], items: Vec<ItemRecord>) -> TestService {
    BookingService::new(
        Arc::new(InMemoryBookingRepository::new()),
        Arc::new(StubUsers::with_ids(user_ids)),
        Arc::new(StubItems::new(items)),
    )
}
