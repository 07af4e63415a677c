use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};

/// Repository trait for Item persistence
///
/// Every operation is atomic for a single item. The repository assigns ids
/// and timestamps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; fails with `Validation` when required fields are missing
    async fn insert(&self, input: NewItem) -> ItemResult<Item>;

    async fn list_all(&self) -> ItemResult<Vec<Item>>;

    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// Apply the set fields of `changes` and return the post-update item
    async fn update_by_id(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Item>;

    /// Delete an item and return what was stored
    async fn delete_by_id(&self, id: Uuid) -> ItemResult<Item>;
}
