use async_trait::async_trait;
use chrono::Utc;
use domain_bookings::PageWindow;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Comment, Item, NewComment, NewItem, UpdateItem};

/// Repository trait for Item persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// List an owner's items ordered by id, cut to the page window
    async fn list_by_owner(&self, owner_id: i64, page: PageWindow) -> ItemResult<Vec<Item>>;

    /// Apply a partial update to an existing item
    async fn update(&self, id: i64, changes: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID
    async fn delete(&self, id: i64) -> ItemResult<()>;

    /// Available items whose name or description contains `text`,
    /// case-insensitively, ordered by id. `text` is never blank here.
    async fn search(&self, text: &str, page: PageWindow) -> ItemResult<Vec<Item>>;
}

/// Repository trait for Comment persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment, stamping the creation time
    async fn create(&self, input: NewComment) -> ItemResult<Comment>;

    /// An item's comments, newest first
    async fn list_for_item(&self, item_id: i64) -> ItemResult<Vec<Comment>>;
}

fn not_found(id: i64) -> ItemError {
    ItemError::NotFound(format!("Item with ID: {} not found", id))
}

/// In-memory implementation of ItemRepository
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<i64, Item>>>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = Item {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: input.name,
            description: input.description,
            available: input.available,
            owner_id: input.owner_id,
        };
        items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, owner_id = item.owner_id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: i64, page: PageWindow) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;

        let mut result: Vec<Item> = items
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect();
        result.sort_by_key(|i| i.id);

        Ok(result
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect())
    }

    async fn update(&self, id: i64, changes: UpdateItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&id).ok_or_else(|| not_found(id))?;
        changes.apply_to(item);
        let updated = item.clone();

        tracing::info!(item_id = id, "Updated item");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ItemResult<()> {
        let mut items = self.items.write().await;
        items.remove(&id).ok_or_else(|| not_found(id))?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(())
    }

    async fn search(&self, text: &str, page: PageWindow) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;
        let needle = text.to_lowercase();

        let mut result: Vec<Item> = items
            .values()
            .filter(|i| i.available)
            .filter(|i| {
                i.name.to_lowercase().contains(&needle)
                    || i.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        result.sort_by_key(|i| i.id);

        Ok(result
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect())
    }
}

/// In-memory implementation of CommentRepository
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<i64, Comment>>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, input: NewComment) -> ItemResult<Comment> {
        let mut comments = self.comments.write().await;

        let comment = Comment {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            text: input.text,
            item_id: input.item_id,
            author_id: input.author_id,
            author_name: input.author_name,
            created: Utc::now(),
        };
        comments.insert(comment.id, comment.clone());

        tracing::info!(comment_id = comment.id, item_id = comment.item_id, "Created comment");
        Ok(comment)
    }

    async fn list_for_item(&self, item_id: i64) -> ItemResult<Vec<Comment>> {
        let comments = self.comments.read().await;

        let mut result: Vec<Comment> = comments
            .values()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));

        Ok(result)
    }
}
