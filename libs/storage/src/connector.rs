use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use tracing::info;

use crate::S3Config;

/// Build an S3 client using the AWS default credential chain:
/// - Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
/// - Shared credentials/config files
/// - Web identity token (EKS IRSA)
/// - IAM instance profile
pub async fn connect_from_config(config: &S3Config) -> Client {
    let shared = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared);
    if let Some(ref endpoint) = config.endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    info!(
        bucket = %config.bucket,
        region = %config.region,
        endpoint = config.endpoint.as_deref().unwrap_or("aws"),
        "S3 client configured"
    );

    Client::from_conf(builder.build())
}

/// Build an S3 client with explicit credentials, bypassing the provider chain.
///
/// Presigning is purely local, so a client built this way can sign URLs
/// without network access (useful in tests and local tooling).
pub fn client_with_static_credentials(
    config: &S3Config,
    access_key_id: impl Into<String>,
    secret_access_key: impl Into<String>,
) -> Client {
    let credentials = Credentials::new(access_key_id, secret_access_key, None, None, "static");

    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials);

    if let Some(ref endpoint) = config.endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
