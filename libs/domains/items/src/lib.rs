//! Items Domain
//!
//! Inventory items persisted in MongoDB, each with an optional image kept in
//! S3-compatible object storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, multipart/JSON forms
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, image upload/replace/cleanup, URL signing
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼────┐ ┌▼───────────┐
//! │ Repo  │ │ ImageStore │  ← traits + MongoDB / S3 implementations
//! └──┬────┘ └────────────┘
//!    │
//! ┌──▼──────────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, MongoItemRepository, S3ImageStore, ItemService};
//! use storage::S3Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("inventory"));
//!
//! let s3_config = S3Config::new("items-bucket");
//! let s3 = storage::connect_from_config(&s3_config).await;
//! let images = S3ImageStore::from_config(s3, &s3_config);
//!
//! let router = handlers::router(ItemService::new(repository, images));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod s3;
pub mod service;
pub mod storage;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemChanges, NewItem, UpdateItem};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use s3::S3ImageStore;
pub use service::ItemService;
pub use storage::{ImageStore, ImageUpload};
