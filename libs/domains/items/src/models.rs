use chrono::{DateTime, Utc};
use domain_bookings::BookingInfo;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Item entity - something an owner lists for lending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Short display name
    pub name: String,
    /// Free-form description, searched together with the name
    pub description: String,
    /// Whether new bookings may be requested
    pub available: bool,
    /// The user who listed the item
    pub owner_id: i64,
}

/// New item record handed to the repository.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
}

/// DTO for listing a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    pub available: bool,
}

/// DTO for a patch-style item update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItem {
    /// Apply the present fields onto an existing item.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

/// Comment entity - feedback left after a finished rental. The author's
/// name is denormalized at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

/// New comment record handed to the repository.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub author_name: String,
}

/// DTO for posting a comment
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
}

/// Comment projection nested in the item detail.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author_name: comment.author_name,
            created: comment.created,
        }
    }
}

/// Item detail: the item enriched with its comments and, for the owner
/// only, the surrounding approved bookings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDetails {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_booking: Option<BookingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_booking: Option<BookingInfo>,
    pub comments: Vec<CommentDto>,
}

impl ItemDetails {
    pub fn new(
        item: Item,
        last_booking: Option<BookingInfo>,
        next_booking: Option<BookingInfo>,
        comments: Vec<CommentDto>,
    ) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            last_booking,
            next_booking,
            comments,
        }
    }
}

fn default_size() -> i64 {
    10
}

/// Paging parameters for the owner listing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct ListParams {
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
            from: 0,
            size: default_size(),
        }
    }
}

/// Parameters for the text search.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct SearchParams {
    /// Text matched against name and description, case-insensitively
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1))]
    pub size: i64,
}
