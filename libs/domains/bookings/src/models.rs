use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Lifecycle state of a booking.
///
/// A booking starts at `Waiting` and moves to `Approved` or `Rejected`
/// exactly once; both are terminal. `Canceled` is reserved for callers of a
/// future cancellation flow — no transition in this service produces it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision
    #[default]
    Waiting,
    /// Confirmed by the item's owner
    Approved,
    /// Declined by the item's owner
    Rejected,
    /// Reserved; unused by any transition
    Canceled,
}

/// Named temporal/status bucket used by the listing queries.
///
/// Parsed from the `state` query parameter with a case-sensitive exact
/// match; any other token is a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum StateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

/// Whether a listing query is evaluated from the renter's side
/// (bookings I made) or the owner's side (bookings made on my items).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewpoint {
    Booker,
    Owner,
}

/// Snapshot of the booked item taken at creation time.
///
/// Availability is a creation-time gate only, so the snapshot carries just
/// what later operations need: the name for the detail projection and the
/// owner id for authorization checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookedItem {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
}

/// Booking entity - a renter's time-bounded claim on an item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Start of the rental period; strictly before `end`
    pub start: DateTime<Utc>,
    /// End of the rental period
    pub end: DateTime<Utc>,
    /// Current lifecycle state
    pub status: BookingStatus,
    /// Item summary snapshotted at creation
    pub item: BookedItem,
    /// The renter who requested the booking
    pub booker_id: i64,
}

/// New booking record handed to the repository by the state machine.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item: BookedItem,
    pub booker_id: i64,
}

fn validate_present_or_future(value: &DateTime<Utc>) -> Result<(), validator::ValidationError> {
    if *value < Utc::now() {
        return Err(validator::ValidationError::new("start_in_past"));
    }
    Ok(())
}

fn validate_future(value: &DateTime<Utc>) -> Result<(), validator::ValidationError> {
    if *value <= Utc::now() {
        return Err(validator::ValidationError::new("end_not_in_future"));
    }
    Ok(())
}

/// DTO for requesting a new booking.
///
/// The submission-time checks (`start` not in the past, `end` strictly in
/// the future) are the transport layer's contract; the state machine itself
/// re-enforces only `start < end`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    #[validate(range(min = 1))]
    pub item_id: i64,
    #[validate(custom(function = validate_present_or_future))]
    pub start: DateTime<Utc>,
    #[validate(custom(function = validate_future))]
    pub end: DateTime<Utc>,
}

fn default_state() -> String {
    StateFilter::All.to_string()
}

fn default_size() -> i64 {
    10
}

/// Query parameters for the listing endpoints.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct ListParams {
    /// Temporal bucket token (ALL, CURRENT, PAST, FUTURE, WAITING, REJECTED)
    #[serde(default = "default_state")]
    pub state: String,
    /// Index of the first result to return
    #[serde(default)]
    #[validate(range(min = 0))]
    pub from: i64,
    /// Page length
    #[serde(default = "default_size")]
    #[validate(range(min = 1))]
    pub size: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            state: default_state(),
            from: 0,
            size: default_size(),
        }
    }
}

/// Page window derived from `(from, size)` caller parameters.
///
/// The window is page-aligned: page index `from / size` (0 when `from` is
/// 0), page length `size`, so `from` values inside a page snap back to
/// that page's first row. Inputs are caller-validated; this type does not
/// re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(from: usize, size: usize) -> Self {
        let page = if from > 0 { from / size } else { 0 };
        Self {
            offset: page * size,
            limit: size,
        }
    }

    /// First page of the given length.
    pub fn first(size: usize) -> Self {
        Self {
            offset: 0,
            limit: size,
        }
    }
}

/// Item summary nested in the detail projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummary {
    pub id: i64,
    pub name: String,
}

/// Booker summary nested in the detail projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookerSummary {
    pub id: i64,
}

/// Detail projection: the full booking representation returned by every
/// booking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: ItemSummary,
    pub booker: BookerSummary,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
            item: ItemSummary {
                id: booking.item.id,
                name: booking.item.name,
            },
            booker: BookerSummary {
                id: booking.booker_id,
            },
        }
    }
}

/// Info projection: the minimal representation used to annotate an item's
/// last/next booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingInfo {
    pub id: i64,
    pub booker_id: i64,
}

impl From<&Booking> for BookingInfo {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
        }
    }
}

/// User record produced by the identity gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Item record produced by the item/owner resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn state_filter_parses_exact_uppercase_tokens() {
        assert_eq!(StateFilter::from_str("ALL").unwrap(), StateFilter::All);
        assert_eq!(
            StateFilter::from_str("CURRENT").unwrap(),
            StateFilter::Current
        );
        assert_eq!(
            StateFilter::from_str("REJECTED").unwrap(),
            StateFilter::Rejected
        );
    }

    #[test]
    fn state_filter_is_case_sensitive() {
        assert!(StateFilter::from_str("all").is_err());
        assert!(StateFilter::from_str("Current").is_err());
        assert!(StateFilter::from_str("UNSUPPORTED_STATUS").is_err());
    }

    #[test]
    fn page_window_is_page_aligned() {
        assert_eq!(PageWindow::new(0, 10), PageWindow { offset: 0, limit: 10 });
        // from inside the first page snaps back to offset 0
        assert_eq!(PageWindow::new(3, 10), PageWindow { offset: 0, limit: 10 });
        assert_eq!(
            PageWindow::new(10, 10),
            PageWindow {
                offset: 10,
                limit: 10
            }
        );
        assert_eq!(
            PageWindow::new(25, 10),
            PageWindow {
                offset: 20,
                limit: 10
            }
        );
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Waiting).unwrap(),
            "\"WAITING\""
        );
        assert_eq!(BookingStatus::Approved.to_string(), "APPROVED");
    }
}
