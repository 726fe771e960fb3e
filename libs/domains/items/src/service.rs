//! Item service - listing management, search, and the booking-enriched
//! projections.

use chrono::{DateTime, Utc};
use domain_bookings::{BookingInfo, BookingRepository, PageWindow, UserDirectory};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    CommentDto, CreateComment, CreateItem, Item, ItemDetails, NewComment, NewItem, UpdateItem,
};
use crate::repository::{CommentRepository, ItemRepository};

/// Service layer for items and their comments.
///
/// The booking repository is consulted read-only: for the owner's last/next
/// annotations and for the finished-rental comment gate.
pub struct ItemService<R, C, B, U>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    repository: Arc<R>,
    comments: Arc<C>,
    bookings: Arc<B>,
    users: Arc<U>,
}

impl<R, C, B, U> ItemService<R, C, B, U>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    pub fn new(repository: Arc<R>, comments: Arc<C>, bookings: Arc<B>, users: Arc<U>) -> Self {
        Self {
            repository,
            comments,
            bookings,
            users,
        }
    }

    /// List a new item; the acting user becomes its owner.
    #[instrument(skip(self, input))]
    pub async fn create(&self, actor_id: i64, input: CreateItem) -> ItemResult<Item> {
        let owner = self.users.resolve_user(actor_id).await?;

        self.repository
            .create(NewItem {
                name: input.name,
                description: input.description,
                available: input.available,
                owner_id: owner.id,
            })
            .await
    }

    /// Partially update an item. Only the owner may change it.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        actor_id: i64,
        item_id: i64,
        changes: UpdateItem,
    ) -> ItemResult<Item> {
        let item = self.resolve_item(item_id).await?;

        if item.owner_id != actor_id {
            return Err(ItemError::Forbidden(
                "User is not the owner of the item.".to_string(),
            ));
        }

        self.repository.update(item_id, changes).await
    }

    /// Item detail with comments, plus the last/next approved bookings when
    /// the caller is the owner.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, actor_id: i64, item_id: i64) -> ItemResult<ItemDetails> {
        self.users.resolve_user(actor_id).await?;
        let item = self.resolve_item(item_id).await?;

        let now = Utc::now();
        self.enrich(item, actor_id, now).await
    }

    /// The actor's own items, each with comments and last/next bookings,
    /// ordered by id and cut to the page window.
    #[instrument(skip(self))]
    pub async fn find_all_by_owner(
        &self,
        actor_id: i64,
        from: i64,
        size: i64,
    ) -> ItemResult<Vec<ItemDetails>> {
        self.users.resolve_user(actor_id).await?;

        let page = PageWindow::new(from as usize, size as usize);
        let items = self.repository.list_by_owner(actor_id, page).await?;

        let now = Utc::now();
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(self.enrich(item, actor_id, now).await?);
        }
        Ok(details)
    }

    /// Case-insensitive text search over available items. Blank text short
    /// circuits to an empty listing; a non-blank text with no matches is a
    /// not-found failure.
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str, from: i64, size: i64) -> ItemResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(vec![]);
        }

        let page = PageWindow::new(from as usize, size as usize);
        let items = self.repository.search(text, page).await?;

        if items.is_empty() {
            return Err(ItemError::NotFound("Items not found.".to_string()));
        }
        Ok(items)
    }

    /// Remove an item. Only the owner may delete it.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: i64, item_id: i64) -> ItemResult<()> {
        let item = self.resolve_item(item_id).await?;

        if item.owner_id != actor_id {
            return Err(ItemError::Forbidden(
                "User is not the owner of the item.".to_string(),
            ));
        }

        self.repository.delete(item_id).await
    }

    /// Post a comment on an item. The author must have an approved rental
    /// of the item that ended before now.
    #[instrument(skip(self, input))]
    pub async fn add_comment(
        &self,
        actor_id: i64,
        item_id: i64,
        input: CreateComment,
    ) -> ItemResult<CommentDto> {
        let author = self.users.resolve_user(actor_id).await?;
        let item = self.resolve_item(item_id).await?;

        let finished = self
            .bookings
            .find_finished_rental(item.id, author.id, Utc::now())
            .await?;
        if finished.is_none() {
            return Err(ItemError::Validation(
                "User did not rent the item.".to_string(),
            ));
        }

        let comment = self
            .comments
            .create(NewComment {
                text: input.text,
                item_id: item.id,
                author_id: author.id,
                author_name: author.name,
            })
            .await?;

        Ok(comment.into())
    }

    async fn resolve_item(&self, item_id: i64) -> ItemResult<Item> {
        self.repository
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| ItemError::NotFound(format!("Item with ID: {} not found", item_id)))
    }

    /// Attach comments, and the booking annotations when `actor_id` owns
    /// the item.
    async fn enrich(
        &self,
        item: Item,
        actor_id: i64,
        now: DateTime<Utc>,
    ) -> ItemResult<ItemDetails> {
        let comments: Vec<CommentDto> = self
            .comments
            .list_for_item(item.id)
            .await?
            .into_iter()
            .map(CommentDto::from)
            .collect();

        let (last, next) = if item.owner_id == actor_id {
            let last = self.bookings.find_last_for_item(item.id, now).await?;
            let next = self.bookings.find_next_for_item(item.id, now).await?;
            (
                last.as_ref().map(BookingInfo::from),
                next.as_ref().map(BookingInfo::from),
            )
        } else {
            (None, None)
        };

        Ok(ItemDetails::new(item, last, next, comments))
    }
}
