use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, env_required};
use std::time::Duration;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_KEY_PREFIX: &str = "uploads";
/// Presigned URL lifetime when none is configured (15 minutes)
const DEFAULT_PRESIGN_TTL_SECS: u64 = 900;
/// SigV4 presigned URLs cannot outlive one week
const MAX_PRESIGN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// S3 bucket settings
#[derive(Clone, Debug)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible servers; enables path-style addressing
    pub endpoint: Option<String>,
    pub presign_ttl_secs: u64,
    /// Prefix for generated object keys, without trailing slash
    pub key_prefix: String,
}

impl S3Config {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            presign_ttl_secs: DEFAULT_PRESIGN_TTL_SECS,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_presign_ttl(mut self, ttl: Duration) -> Self {
        self.presign_ttl_secs = ttl.as_secs();
        self
    }

    pub fn presign_ttl(&self) -> Duration {
        Duration::from_secs(self.presign_ttl_secs)
    }
}

/// Load S3Config from environment variables
///
/// - `S3_BUCKET_NAME` (required)
/// - `AWS_REGION` (default: `us-east-1`)
/// - `S3_ENDPOINT` (optional)
/// - `S3_PRESIGN_TTL_SECS` (default: 900, max: 604800)
/// - `S3_KEY_PREFIX` (default: `uploads`)
///
/// Credentials are not read here; the AWS default provider chain resolves them.
impl FromEnv for S3Config {
    fn from_env() -> Result<Self, ConfigError> {
        let bucket = env_required("S3_BUCKET_NAME")?;
        let region = env_or_default("AWS_REGION", DEFAULT_REGION);
        let endpoint = std::env::var("S3_ENDPOINT").ok().filter(|e| !e.is_empty());

        let presign_ttl_secs = env_parse_or("S3_PRESIGN_TTL_SECS", DEFAULT_PRESIGN_TTL_SECS)?;
        if presign_ttl_secs == 0 || presign_ttl_secs > MAX_PRESIGN_TTL_SECS {
            return Err(ConfigError::ParseError {
                key: "S3_PRESIGN_TTL_SECS".to_string(),
                details: format!("must be between 1 and {MAX_PRESIGN_TTL_SECS}"),
            });
        }

        let key_prefix = env_or_default("S3_KEY_PREFIX", DEFAULT_KEY_PREFIX)
            .trim_matches('/')
            .to_string();

        Ok(Self {
            bucket,
            region,
            endpoint,
            presign_ttl_secs,
            key_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_config_defaults() {
        let config = S3Config::new("items-bucket");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.key_prefix, "uploads");
        assert_eq!(config.presign_ttl(), Duration::from_secs(900));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_s3_config_from_env() {
        temp_env::with_vars(
            [
                ("S3_BUCKET_NAME", Some("items-bucket")),
                ("AWS_REGION", Some("eu-central-1")),
                ("S3_ENDPOINT", Some("http://localhost:9000")),
                ("S3_PRESIGN_TTL_SECS", Some("60")),
                ("S3_KEY_PREFIX", Some("/images/")),
            ],
            || {
                let config = S3Config::from_env().unwrap();
                assert_eq!(config.bucket, "items-bucket");
                assert_eq!(config.region, "eu-central-1");
                assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
                assert_eq!(config.presign_ttl_secs, 60);
                assert_eq!(config.key_prefix, "images");
            },
        );
    }

    #[test]
    fn test_s3_config_from_env_missing_bucket() {
        temp_env::with_var_unset("S3_BUCKET_NAME", || {
            let err = S3Config::from_env().unwrap_err();
            assert!(err.to_string().contains("S3_BUCKET_NAME"));
        });
    }

    #[test]
    fn test_s3_config_rejects_ttl_over_one_week() {
        temp_env::with_vars(
            [
                ("S3_BUCKET_NAME", Some("items-bucket")),
                ("S3_PRESIGN_TTL_SECS", Some("604801")),
            ],
            || {
                let err = S3Config::from_env().unwrap_err();
                assert!(err.to_string().contains("S3_PRESIGN_TTL_SECS"));
            },
        );
    }

    #[test]
    fn test_s3_config_empty_endpoint_is_ignored() {
        temp_env::with_vars(
            [("S3_BUCKET_NAME", Some("items-bucket")), ("S3_ENDPOINT", Some(""))],
            || {
                assert!(S3Config::from_env().unwrap().endpoint.is_none());
            },
        );
    }
}
