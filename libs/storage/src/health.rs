use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::{StorageError, StorageResult};

/// Verify the bucket exists and the credentials may access it (`HeadBucket`).
pub async fn check_bucket(client: &Client, bucket: &str) -> StorageResult<()> {
    client
        .head_bucket()
        .bucket(bucket)
        .send()
        .await
        .map_err(|e| StorageError::BucketUnavailable {
            bucket: bucket.to_string(),
            details: DisplayErrorContext(&e).to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{S3Config, client_with_static_credentials};

    #[tokio::test]
    async fn test_check_bucket_reports_unreachable_endpoint() {
        // Nothing listens on port 9 (discard); the request fails fast
        let config = S3Config::new("items-bucket").with_endpoint("http://127.0.0.1:9");
        let client = client_with_static_credentials(&config, "AKIDEXAMPLE", "secret");

        let err = check_bucket(&client, &config.bucket).await.unwrap_err();
        assert!(err.to_string().contains("items-bucket"));
    }
}
