//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into each router (the clients are cheap `Arc` handles over their pools).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    pub s3_client: storage::Client,
}
