//! Lifecycle tests for the Bookings domain
//!
//! These drive the service directly (no HTTP layer) through full
//! scenarios: create, decide, read back, and the temporal bucket
//! queries over a seeded history.

mod common;

use chrono::{Duration, Utc};
use common::{StubItems, StubUsers, item};
use domain_bookings::{
    BookedItem, BookingError, BookingStatus, CreateBooking, InMemoryBookingRepository, NewBooking,
    PageWindow, StateFilter, Viewpoint,
};
use domain_bookings::repository::BookingRepository;
use domain_bookings::service::BookingService;
use std::sync::Arc;

type Service = BookingService<InMemoryBookingRepository, StubUsers, StubItems>;

/// Service plus a handle on its repository, for seeding bookings that the
/// creation gate would refuse (past or current periods).
fn service_with_repo(
    user_ids: &[i64],
    items: Vec<domain_bookings::ItemRecord>,
) -> (Service, Arc<InMemoryBookingRepository>) {
    let repository = Arc::new(InMemoryBookingRepository::new());
    let service = BookingService::new(
        repository.clone(),
        Arc::new(StubUsers::with_ids(user_ids)),
        Arc::new(StubItems::new(items)),
    );
    (service, repository)
}

fn create_input(item_id: i64, start_h: i64, end_h: i64) -> CreateBooking {
    let now = Utc::now();
    CreateBooking {
        item_id,
        start: now + Duration::hours(start_h),
        end: now + Duration::hours(end_h),
    }
}

/// A booking row with arbitrary period, bypassing the creation gate.
async fn seed(
    repository: &InMemoryBookingRepository,
    item_id: i64,
    owner_id: i64,
    booker_id: i64,
    start_h: i64,
    end_h: i64,
    status: BookingStatus,
) -> i64 {
    let now = Utc::now();
    let booking = repository
        .create(NewBooking {
            start: now + Duration::hours(start_h),
            end: now + Duration::hours(end_h),
            item: BookedItem {
                id: item_id,
                name: format!("item-{}", item_id),
                owner_id,
            },
            booker_id,
        })
        .await
        .unwrap();
    if status != BookingStatus::Waiting {
        repository.set_status(booking.id, status).await.unwrap();
    }
    booking.id
}

#[tokio::test]
async fn create_then_read_back_by_both_parties() {
    let (service, _) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    let created = service.create(2, create_input(1, 1, 2)).await.unwrap();
    assert_eq!(created.status, BookingStatus::Waiting);

    // The booker and the item owner both see the booking
    let seen_by_booker = service.find_by_id(2, created.id).await.unwrap();
    assert_eq!(seen_by_booker.id, created.id);

    let seen_by_owner = service.find_by_id(1, created.id).await.unwrap();
    assert_eq!(seen_by_owner.item.id, 1);
}

#[tokio::test]
async fn approval_is_visible_to_the_booker() {
    let (service, _) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    let created = service.create(2, create_input(1, 1, 2)).await.unwrap();
    service.set_status(1, created.id, true).await.unwrap();

    let seen = service.find_by_id(2, created.id).await.unwrap();
    assert_eq!(seen.status, BookingStatus::Approved);
}

#[tokio::test]
async fn rejected_booking_can_be_redecided() {
    let (service, _) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    let created = service.create(2, create_input(1, 1, 2)).await.unwrap();
    let rejected = service.set_status(1, created.id, false).await.unwrap();
    assert_eq!(rejected.status, BookingStatus::Rejected);

    // Only an approval is final; a rejection may be reversed
    let approved = service.set_status(1, created.id, true).await.unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);

    let err = service.set_status(1, created.id, false).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[tokio::test]
async fn buckets_partition_a_seeded_history() {
    let (service, repository) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    // Booker 2 on item 1 (owned by 1): two past, one current, two future
    seed(&repository, 1, 1, 2, -10, -8, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, -6, -4, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, -1, 1, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, 2, 3, BookingStatus::Waiting).await;
    seed(&repository, 1, 1, 2, 5, 6, BookingStatus::Rejected).await;

    let all = service
        .find_all_by_state(2, Viewpoint::Booker, "ALL", 0, 10)
        .await
        .unwrap();
    assert_eq!(all.len(), 5);
    // ALL is ordered by start descending
    assert!(all.windows(2).all(|w| w[0].start >= w[1].start));

    let past = service
        .find_all_by_state(2, Viewpoint::Booker, "PAST", 0, 10)
        .await
        .unwrap();
    assert_eq!(past.len(), 2);

    let current = service
        .find_all_by_state(2, Viewpoint::Booker, "CURRENT", 0, 10)
        .await
        .unwrap();
    assert_eq!(current.len(), 1);

    let future = service
        .find_all_by_state(2, Viewpoint::Booker, "FUTURE", 0, 10)
        .await
        .unwrap();
    assert_eq!(future.len(), 2);

    let waiting = service
        .find_all_by_state(2, Viewpoint::Booker, "WAITING", 0, 10)
        .await
        .unwrap();
    assert_eq!(waiting.len(), 1);

    let rejected = service
        .find_all_by_state(2, Viewpoint::Booker, "REJECTED", 0, 10)
        .await
        .unwrap();
    assert_eq!(rejected.len(), 1);
}

#[tokio::test]
async fn current_bucket_is_ordered_oldest_first() {
    let (service, repository) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    seed(&repository, 1, 1, 2, -1, 3, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, -5, 2, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, -3, 1, BookingStatus::Approved).await;

    for viewpoint in [Viewpoint::Booker, Viewpoint::Owner] {
        let actor = match viewpoint {
            Viewpoint::Booker => 2,
            Viewpoint::Owner => 1,
        };
        let current = service
            .find_all_by_state(actor, viewpoint, "CURRENT", 0, 10)
            .await
            .unwrap();
        assert_eq!(current.len(), 3);
        assert!(current.windows(2).all(|w| w[0].start <= w[1].start));
    }
}

#[tokio::test]
async fn owner_viewpoint_collects_across_items() {
    let (service, repository) =
        service_with_repo(&[1, 2, 3], vec![item(1, 1, true), item(2, 1, true)]);

    seed(&repository, 1, 1, 2, 1, 2, BookingStatus::Waiting).await;
    seed(&repository, 2, 1, 3, 3, 4, BookingStatus::Waiting).await;

    let on_my_items = service
        .find_all_by_state(1, Viewpoint::Owner, "ALL", 0, 10)
        .await
        .unwrap();
    assert_eq!(on_my_items.len(), 2);

    // The booker viewpoint only sees their own requests
    let mine = service
        .find_all_by_state(2, Viewpoint::Booker, "ALL", 0, 10)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].item.id, 1);
}

#[tokio::test]
async fn paging_is_page_aligned() {
    let (service, repository) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);

    for h in 1..=7 {
        seed(&repository, 1, 1, 2, h, h + 10, BookingStatus::Waiting).await;
    }

    // from=3, size=2 snaps to page 1: rows 2..4 of the desc ordering
    let page = service
        .find_all_by_state(2, Viewpoint::Booker, "ALL", 3, 2)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);

    let full = service
        .find_all_by_state(2, Viewpoint::Booker, "ALL", 0, 10)
        .await
        .unwrap();
    assert_eq!(page[0].id, full[2].id);
    assert_eq!(page[1].id, full[3].id);
}

#[tokio::test]
async fn last_and_next_pick_approved_neighbours() {
    let (_, repository) = service_with_repo(&[1, 2], vec![item(1, 1, true)]);
    let now = Utc::now();

    let past_far = seed(&repository, 1, 1, 2, -10, -8, BookingStatus::Approved).await;
    let past_near = seed(&repository, 1, 1, 2, -4, -2, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, -3, -1, BookingStatus::Rejected).await;
    let future_near = seed(&repository, 1, 1, 2, 2, 3, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 2, 1, 2, BookingStatus::Waiting).await;

    let last = repository.find_last_for_item(1, now).await.unwrap().unwrap();
    assert_eq!(last.id, past_near);
    assert_ne!(last.id, past_far);

    let next = repository.find_next_for_item(1, now).await.unwrap().unwrap();
    assert_eq!(next.id, future_near);
}

#[tokio::test]
async fn finished_rental_requires_approved_and_ended() {
    let (_, repository) = service_with_repo(&[1, 2, 3], vec![item(1, 1, true)]);
    let now = Utc::now();

    seed(&repository, 1, 1, 2, -4, -2, BookingStatus::Approved).await;
    seed(&repository, 1, 1, 3, -4, -2, BookingStatus::Rejected).await;

    assert!(repository.find_finished_rental(1, 2, now).await.unwrap().is_some());
    // Rejected rental does not count
    assert!(repository.find_finished_rental(1, 3, now).await.unwrap().is_none());
    // Neither does a rental still running
    seed(&repository, 1, 1, 3, -1, 1, BookingStatus::Approved).await;
    assert!(repository.find_finished_rental(1, 3, now).await.unwrap().is_none());
}

// PageWindow is part of the repository contract; sanity-check the alias here
#[test]
fn first_page_window() {
    assert_eq!(PageWindow::first(5), PageWindow { offset: 0, limit: 5 });
    assert_eq!(
        StateFilter::All.to_string(),
        "ALL",
        "tokens render uppercase"
    );
}
