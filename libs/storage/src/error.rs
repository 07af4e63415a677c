/// Errors from bucket-level storage checks
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Bucket '{bucket}' is not reachable: {details}")]
    BucketUnavailable { bucket: String, details: String },
}

pub type StorageResult<T> = Result<T, StorageError>;
