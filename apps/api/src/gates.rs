//! Directory adapters wiring the bookings and items domains to the
//! concrete stores. The domains only see the resolver traits; these gates
//! translate store rows into the records the traits promise.

use async_trait::async_trait;
use domain_bookings::{BookingError, BookingResult, ItemDirectory, ItemRecord, UserDirectory, UserRecord};
use domain_items::ItemRepository;
use domain_users::UserRepository;
use std::sync::Arc;

/// Identity gate: verifies an acting user exists in the user store.
pub struct UserGate<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> UserGate<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository> UserDirectory for UserGate<R> {
    async fn resolve_user(&self, user_id: i64) -> BookingResult<UserRecord> {
        let user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| BookingError::Internal(e.to_string()))?
            .ok_or_else(|| {
                BookingError::NotFound(format!("User with ID: {} not found", user_id))
            })?;

        Ok(UserRecord {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

/// Item gate: resolves an item and its ownership/availability facts for
/// the booking state machine.
pub struct ItemGate<R: ItemRepository> {
    items: Arc<R>,
}

impl<R: ItemRepository> ItemGate<R> {
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R: ItemRepository> ItemDirectory for ItemGate<R> {
    async fn resolve_item(&self, item_id: i64) -> BookingResult<ItemRecord> {
        let item = self
            .items
            .get_by_id(item_id)
            .await
            .map_err(|e| BookingError::Internal(e.to_string()))?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Item with ID: {} not found", item_id))
            })?;

        Ok(ItemRecord {
            id: item.id,
            name: item.name,
            owner_id: item.owner_id,
            available: item.available,
        })
    }
}
