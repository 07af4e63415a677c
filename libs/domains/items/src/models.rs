use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Item entity as stored in MongoDB
///
/// `image` holds the object key. Read endpoints replace it with a signed URL
/// in the response only; a URL is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Object key on write responses, signed URL on read responses
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// DTO for updating an existing item; omitted fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Repository input for an insert, with the image key already resolved
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// Repository input for a partial update
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ItemChanges {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// Body of `PUT /item/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemResponse {
    pub success: bool,
    pub updated_item: Item,
}

/// Body of `DELETE /item/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
}

impl Item {
    pub fn new(input: NewItem) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            created_at: now,
            updated_at: now,
        }
    }
}

impl NewItem {
    pub fn from_create(input: CreateItem, image: Option<String>) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            image,
        }
    }
}

impl ItemChanges {
    pub fn from_update(input: UpdateItem, image: Option<String>) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            image,
        }
    }
}
