//! S3-compatible object storage connector
//!
//! Builds `aws_sdk_s3::Client`s from [`S3Config`] and checks bucket reachability.
//! Works against AWS S3 and S3-compatible servers (MinIO, R2) via `S3_ENDPOINT`.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use storage::{S3Config, check_bucket, connect_from_config};
//!
//! let config = S3Config::from_env()?;
//! let client = connect_from_config(&config).await;
//! check_bucket(&client, &config.bucket).await?;
//! ```

mod config;
mod connector;
mod error;
mod health;

pub use config::S3Config;
pub use connector::{client_with_static_credentials, connect_from_config};
pub use error::{StorageError, StorageResult};
pub use health::check_bucket;

pub use aws_sdk_s3::Client;
