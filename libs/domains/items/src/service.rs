//! Item Service - coordinates the repository and image storage

use futures::future::try_join_all;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemChanges, NewItem, UpdateItem};
use crate::repository::ItemRepository;
use crate::storage::{ImageStore, ImageUpload};

/// Item service
///
/// Writes return the stored object key in `image`; reads swap it for a
/// signed URL. Old images are removed only after the repository has let go
/// of them, and a failed removal never fails the request.
pub struct ItemService<R: ItemRepository, S: ImageStore> {
    repository: Arc<R>,
    images: Arc<S>,
}

impl<R: ItemRepository, S: ImageStore> ItemService<R, S> {
    pub fn new(repository: R, images: S) -> Self {
        Self {
            repository: Arc::new(repository),
            images: Arc::new(images),
        }
    }

    #[instrument(skip(self, input, image), fields(item_name = %input.name, has_image = image.is_some()))]
    pub async fn create_item(
        &self,
        input: CreateItem,
        image: Option<ImageUpload>,
    ) -> ItemResult<Item> {
        input.validate()?;

        let key = match image {
            Some(upload) => Some(self.images.store(upload).await?),
            None => None,
        };

        self.repository
            .insert(NewItem::from_create(input, key))
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let items = self.repository.list_all().await?;
        try_join_all(items.into_iter().map(|item| self.with_signed_image(item))).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        let item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ItemError::not_found(id))?;

        self.with_signed_image(item).await
    }

    #[instrument(skip(self, input, image), fields(has_image = image.is_some()))]
    pub async fn update_item(
        &self,
        id: Uuid,
        input: UpdateItem,
        image: Option<ImageUpload>,
    ) -> ItemResult<Item> {
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ItemError::not_found(id))?;

        input.validate()?;

        let new_key = match image {
            Some(upload) => Some(self.images.store(upload).await?),
            None => None,
        };

        let changes = ItemChanges::from_update(input, new_key.clone());
        let updated = self.repository.update_by_id(id, changes).await?;

        if let (Some(new_key), Some(old_key)) = (new_key, existing.image) {
            if new_key != old_key {
                self.remove_image(&old_key).await;
            }
        }

        Ok(updated)
    }

    /// Delete an item and then its image; returns the deleted item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<Item> {
        let deleted = self.repository.delete_by_id(id).await?;

        if let Some(ref key) = deleted.image {
            self.remove_image(key).await;
        }

        Ok(deleted)
    }

    async fn with_signed_image(&self, mut item: Item) -> ItemResult<Item> {
        if let Some(key) = item.image.take() {
            item.image = Some(self.images.sign_read_url(&key).await?);
        }
        Ok(item)
    }

    /// Best-effort removal of an image no item references anymore
    async fn remove_image(&self, key: &str) {
        if let Err(e) = self.images.delete(key).await {
            tracing::warn!(key = %key, error = %e, "Failed to delete image, object left behind");
        }
    }
}

impl<R: ItemRepository, S: ImageStore> Clone for ItemService<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            images: Arc::clone(&self.images),
        }
    }
}
