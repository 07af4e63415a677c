//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Binary, Bson, Document, doc, spec::BinarySubtype, to_bson},
    options::ReturnDocument,
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemChanges, NewItem};
use crate::repository::ItemRepository;

pub const ITEMS_COLLECTION: &str = "items";

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("inventory"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, ITEMS_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    /// `_id` match in the encoding `insert_one` writes: the driver's raw
    /// serializer stores a `Uuid` as generic binary, not as a string
    fn id_filter(id: Uuid) -> Document {
        let id = Bson::Binary(Binary {
            subtype: BinarySubtype::Generic,
            bytes: id.as_bytes().to_vec(),
        });
        doc! { "_id": id }
    }

    /// `$set` document for the fields present in `changes`, plus `updated_at`
    fn set_document(changes: &ItemChanges) -> ItemResult<Document> {
        let mut set = Document::new();

        if let Some(ref name) = changes.name {
            set.insert("name", name);
        }
        if let Some(ref description) = changes.description {
            set.insert("description", description);
        }
        if let Some(price) = changes.price {
            set.insert("price", price);
        }
        if let Some(ref image) = changes.image {
            set.insert("image", image);
        }
        set.insert("updated_at", to_bson(&Utc::now())?);

        Ok(set)
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert(&self, input: NewItem) -> ItemResult<Item> {
        input.validate()?;
        let item = Item::new(input);

        self.collection.insert_one(&item).await?;

        tracing::info!(item_id = %item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, changes))]
    async fn update_by_id(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Item> {
        changes.validate()?;
        let update = doc! { "$set": Self::set_document(&changes)? };

        let item = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ItemError::not_found(id))?;

        tracing::info!(item_id = %id, "Item updated successfully");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> ItemResult<Item> {
        let item = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?
            .ok_or_else(|| ItemError::not_found(id))?;

        tracing::info!(item_id = %id, "Item deleted successfully");
        Ok(item)
    }
}
