use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;
use storage::S3Config;

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub s3: S3Config,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = MongoConfig::from_env()?;
        let s3 = S3Config::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            mongodb,
            s3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("3001")),
                ("MONGODB_URL", None),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", None),
                ("MONGO_URI", Some("mongodb://mongo:27017")),
                ("DB_NAME", Some("inventory_test")),
                ("S3_BUCKET_NAME", Some("items-bucket")),
                ("AWS_REGION", Some("eu-west-1")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 3001);
                assert_eq!(config.mongodb.database(), "inventory_test");
                assert_eq!(config.s3.bucket, "items-bucket");
                assert_eq!(config.s3.region, "eu-west-1");
                assert_eq!(config.app.name, "inventory_api");
            },
        );
    }

    #[test]
    fn test_config_requires_bucket() {
        temp_env::with_vars(
            [
                ("MONGO_URI", Some("mongodb://mongo:27017")),
                ("S3_BUCKET_NAME", None),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
