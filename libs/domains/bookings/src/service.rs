//! Booking service - the state machine and the temporal query engine.

use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use tracing::instrument;

use crate::directory::{ItemDirectory, UserDirectory};
use crate::error::{BookingError, BookingResult};
use crate::models::{
    BookedItem, Booking, BookingDto, BookingStatus, CreateBooking, NewBooking, PageWindow,
    StateFilter, Viewpoint,
};
use crate::repository::BookingRepository;

/// Service layer for the booking lifecycle and availability queries.
///
/// Owns no data: bookings live in the injected repository, and users/items
/// are resolved through the directory seams on every call.
pub struct BookingService<R, U, I>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    repository: Arc<R>,
    users: Arc<U>,
    items: Arc<I>,
}

impl<R, U, I> BookingService<R, U, I>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    pub fn new(repository: Arc<R>, users: Arc<U>, items: Arc<I>) -> Self {
        Self {
            repository,
            users,
            items,
        }
    }

    /// Create a booking request for an item.
    ///
    /// The requester must exist and must not own the item; the item must
    /// exist and be available. The owner-books-own-item case is surfaced as
    /// `NotFound` on purpose: the caller is not told whether the item
    /// exists or is merely theirs.
    #[instrument(skip(self, input), fields(item_id = input.item_id))]
    pub async fn create(&self, actor_id: i64, input: CreateBooking) -> BookingResult<BookingDto> {
        if input.end <= input.start {
            return Err(BookingError::Validation(
                "Booking end date is before or equal to start date.".to_string(),
            ));
        }

        let booker = self.users.resolve_user(actor_id).await?;
        let item = self.items.resolve_item(input.item_id).await?;

        if !item.available {
            return Err(BookingError::Validation("Item is unavailable.".to_string()));
        }

        if item.owner_id == actor_id {
            return Err(BookingError::NotFound(
                "User cannot book own item.".to_string(),
            ));
        }

        let booking = self
            .repository
            .create(NewBooking {
                start: input.start,
                end: input.end,
                item: BookedItem {
                    id: item.id,
                    name: item.name,
                    owner_id: item.owner_id,
                },
                booker_id: booker.id,
            })
            .await?;

        Ok(booking.into())
    }

    /// Approve or reject a waiting booking.
    ///
    /// Only the item's owner may decide; anyone else gets `NotFound` (the
    /// same disguise as above). A booking that is already approved cannot
    /// be decided again, whichever way.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        actor_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> BookingResult<BookingDto> {
        let booking = self.resolve_booking(booking_id).await?;

        if booking.item.owner_id != actor_id {
            return Err(BookingError::NotFound(
                "User is not the owner of the item.".to_string(),
            ));
        }

        if booking.status == BookingStatus::Approved {
            return Err(BookingError::Validation(
                "Booking is already approved.".to_string(),
            ));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        let updated = self.repository.set_status(booking_id, status).await?;

        Ok(updated.into())
    }

    /// Fetch a single booking, visible only to its booker or the item's
    /// owner.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, actor_id: i64, booking_id: i64) -> BookingResult<BookingDto> {
        self.users.resolve_user(actor_id).await?;
        let booking = self.resolve_booking(booking_id).await?;

        if booking.booker_id != actor_id && booking.item.owner_id != actor_id {
            return Err(BookingError::NotFound(
                "User is not the owner or booker of the item.".to_string(),
            ));
        }

        Ok(booking.into())
    }

    /// List bookings for the actor from the given viewpoint, filtered by a
    /// named temporal bucket and cut to the `(from, size)` page window.
    ///
    /// `from`/`size` bounds are the transport layer's contract and are not
    /// re-validated here.
    #[instrument(skip(self))]
    pub async fn find_all_by_state(
        &self,
        actor_id: i64,
        viewpoint: Viewpoint,
        state: &str,
        from: i64,
        size: i64,
    ) -> BookingResult<Vec<BookingDto>> {
        self.users.resolve_user(actor_id).await?;

        let filter = StateFilter::from_str(state)
            .map_err(|_| BookingError::Validation(format!("Unknown state: {}", state)))?;

        let page = PageWindow::new(from as usize, size as usize);
        let now = Utc::now();

        // An owner with no booked items at all has nothing to moderate;
        // that is a caller mistake, not an empty page.
        if viewpoint == Viewpoint::Owner {
            let any = self
                .repository
                .find_by_state(
                    Viewpoint::Owner,
                    actor_id,
                    StateFilter::All,
                    now,
                    PageWindow::first(size as usize),
                )
                .await?;
            if any.is_empty() {
                return Err(BookingError::Validation(
                    "User doesn't have booked items.".to_string(),
                ));
            }
        }

        let bookings = self
            .repository
            .find_by_state(viewpoint, actor_id, filter, now, page)
            .await?;

        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }

    async fn resolve_booking(&self, booking_id: i64) -> BookingResult<Booking> {
        self.repository
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("Booking id not found in storage".to_string()))
    }
}
