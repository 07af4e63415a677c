//! S3 implementation of ImageStore

use async_trait::async_trait;
use aws_sdk_s3::{
    Client, error::DisplayErrorContext, presigning::PresigningConfig, primitives::ByteStream,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use storage::S3Config;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::storage::{ImageStore, ImageUpload, object_key};

/// Metadata entry recording the form field an object was uploaded from
const FIELD_NAME_METADATA: &str = "fieldName";

pub struct S3ImageStore {
    client: Client,
    bucket: String,
    key_prefix: String,
    presign_ttl: Duration,
    /// Last millisecond stamp handed out; keeps keys unique within the process
    last_millis: AtomicU64,
}

impl S3ImageStore {
    pub fn new(
        client: Client,
        bucket: impl Into<String>,
        key_prefix: impl Into<String>,
        presign_ttl: Duration,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key_prefix: key_prefix.into(),
            presign_ttl,
            last_millis: AtomicU64::new(0),
        }
    }

    pub fn from_config(client: Client, config: &S3Config) -> Self {
        Self::new(
            client,
            config.bucket.clone(),
            config.key_prefix.clone(),
            config.presign_ttl(),
        )
    }

    /// Current unix time in milliseconds, bumped past the previous stamp
    fn next_millis(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let previous = self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);

        now.max(previous + 1)
    }
}

fn storage_error<E>(context: &str, err: E) -> ItemError
where
    E: std::error::Error,
{
    ItemError::Storage(format!("{context}: {}", DisplayErrorContext(&err)))
}

#[async_trait]
impl ImageStore for S3ImageStore {
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    async fn store(&self, upload: ImageUpload) -> ItemResult<String> {
        let key = object_key(&self.key_prefix, self.next_millis(), &upload.file_name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(upload.bytes))
            .set_content_type(upload.content_type)
            .metadata(FIELD_NAME_METADATA, upload.field_name)
            .send()
            .await
            .map_err(|e| storage_error("PutObject failed", e))?;

        tracing::info!(key = %key, "Image stored");
        Ok(key)
    }

    #[instrument(skip(self))]
    async fn sign_read_url(&self, key: &str) -> ItemResult<String> {
        let presigning = PresigningConfig::expires_in(self.presign_ttl)
            .map_err(|e| storage_error("invalid presign TTL", e))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| storage_error("presigning GetObject failed", e))?;

        Ok(request.uri().to_string())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> ItemResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| storage_error("DeleteObject failed", e))?;

        tracing::info!(key = %key, "Image deleted");
        Ok(())
    }
}
