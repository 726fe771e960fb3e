use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{BookingError, BookingResult};
use crate::models::{
    Booking, BookingStatus, NewBooking, PageWindow, StateFilter, Viewpoint,
};

/// Repository trait for Booking persistence
///
/// This trait defines the data access interface for bookings. Each bucket
/// query takes the query timestamp explicitly so that a single `now` is
/// used for the whole selection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking with status `Waiting`
    async fn create(&self, input: NewBooking) -> BookingResult<Booking>;

    /// Get a booking by ID
    async fn get_by_id(&self, id: i64) -> BookingResult<Option<Booking>>;

    /// Overwrite the status of an existing booking
    async fn set_status(&self, id: i64, status: BookingStatus) -> BookingResult<Booking>;

    /// Select the bookings visible from `viewpoint` for `actor_id`,
    /// filtered by the temporal bucket and cut to the page window.
    ///
    /// Ordered by `start` descending, except the `Current` bucket which is
    /// ascending.
    async fn find_by_state(
        &self,
        viewpoint: Viewpoint,
        actor_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: PageWindow,
    ) -> BookingResult<Vec<Booking>>;

    /// The approved booking of the item with the greatest `end` among those
    /// with `start <= now`
    async fn find_last_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>>;

    /// The approved booking of the item with the smallest `start` among
    /// those with `start > now`
    async fn find_next_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>>;

    /// An approved booking of the item by the given renter that ended
    /// before `now`, if any
    async fn find_finished_rental(
        &self,
        item_id: i64,
        booker_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>>;
}

fn matches_viewpoint(booking: &Booking, viewpoint: Viewpoint, actor_id: i64) -> bool {
    match viewpoint {
        Viewpoint::Booker => booking.booker_id == actor_id,
        Viewpoint::Owner => booking.item.owner_id == actor_id,
    }
}

fn matches_state(booking: &Booking, filter: StateFilter, now: DateTime<Utc>) -> bool {
    match filter {
        StateFilter::All => true,
        StateFilter::Current => booking.start < now && booking.end > now,
        StateFilter::Past => booking.end < now,
        StateFilter::Future => booking.start > now,
        StateFilter::Waiting => booking.status == BookingStatus::Waiting,
        StateFilter::Rejected => booking.status == BookingStatus::Rejected,
    }
}

/// In-memory implementation of BookingRepository
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<i64, Booking>>>,
    next_id: AtomicI64,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, input: NewBooking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;

        let booking = Booking {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            start: input.start,
            end: input.end,
            status: BookingStatus::Waiting,
            item: input.item,
            booker_id: input.booker_id,
        };
        bookings.insert(booking.id, booking.clone());

        tracing::info!(booking_id = booking.id, item_id = booking.item.id, "Created booking");
        Ok(booking)
    }

    async fn get_by_id(&self, id: i64) -> BookingResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn set_status(&self, id: i64, status: BookingStatus) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| BookingError::NotFound("Booking id not found in storage".to_string()))?;
        booking.status = status;
        let updated = booking.clone();

        tracing::info!(booking_id = id, status = %status, "Updated booking status");
        Ok(updated)
    }

    async fn find_by_state(
        &self,
        viewpoint: Viewpoint,
        actor_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: PageWindow,
    ) -> BookingResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;

        let mut result: Vec<Booking> = bookings
            .values()
            .filter(|b| matches_viewpoint(b, viewpoint, actor_id))
            .filter(|b| matches_state(b, filter, now))
            .cloned()
            .collect();

        // Every bucket orders newest-first except Current, which reads as a
        // timeline of running rentals.
        match filter {
            StateFilter::Current => result.sort_by(|a, b| a.start.cmp(&b.start)),
            _ => result.sort_by(|a, b| b.start.cmp(&a.start)),
        }

        let result: Vec<Booking> = result
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();

        Ok(result)
    }

    async fn find_last_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| {
                b.item.id == item_id && b.status == BookingStatus::Approved && b.start <= now
            })
            .max_by_key(|b| b.end)
            .cloned())
    }

    async fn find_next_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| {
                b.item.id == item_id && b.status == BookingStatus::Approved && b.start > now
            })
            .min_by_key(|b| b.start)
            .cloned())
    }

    async fn find_finished_rental(
        &self,
        item_id: i64,
        booker_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .find(|b| {
                b.item.id == item_id
                    && b.booker_id == booker_id
                    && b.status == BookingStatus::Approved
                    && b.end < now
            })
            .cloned())
    }
}
