use async_trait::async_trait;
use axum_helpers::UploadedFile;
use bytes::Bytes;

use crate::error::ItemResult;

/// Fallback file name when an upload carries none
const DEFAULT_FILE_NAME: &str = "image";

/// An image attached to a create or update request
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    /// Form field the file arrived in; recorded as object metadata
    pub field_name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl From<UploadedFile> for ImageUpload {
    fn from(file: UploadedFile) -> Self {
        Self {
            field_name: file.field_name,
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        }
    }
}

/// Object storage gateway for item images
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the bytes under a fresh key and return that key
    async fn store(&self, upload: ImageUpload) -> ItemResult<String>;

    /// Time-limited GET URL for `key`
    async fn sign_read_url(&self, key: &str) -> ItemResult<String>;

    /// Remove the object; a missing key is not an error
    async fn delete(&self, key: &str) -> ItemResult<()>;
}

/// Object key for an upload: `{prefix}/{millis}-{file name}`.
///
/// Only the last path segment of the client-supplied name is kept.
pub fn object_key(prefix: &str, millis: u64, file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let base = if base.is_empty() { DEFAULT_FILE_NAME } else { base };

    if prefix.is_empty() {
        format!("{millis}-{base}")
    } else {
        format!("{prefix}/{millis}-{base}")
    }
}
