//! Items API routes
//!
//! Wires the items domain to MongoDB and S3.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, S3ImageStore, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.db.clone());
    let images = S3ImageStore::from_config(state.s3_client.clone(), &state.config.s3);

    handlers::router(ItemService::new(repository, images))
}
