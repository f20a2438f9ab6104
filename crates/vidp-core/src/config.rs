//! Configuration module
//!
//! One explicit configuration struct, built once at startup from environment
//! variables (with `.env` support) and passed to components by reference.

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_VIDEO_SIZE_MB;

const DEFAULT_APP_NAME: &str = "VidP Local API";
const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8000;
const DEFAULT_STORAGE_ROOT: &str = "./local_storage";
const DEFAULT_VIDEO_PATH: &str = "./local_storage/videos";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "vidp_db";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub app_name: String,
    pub app_host: String,
    pub app_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Base directory for all local state.
    pub local_storage_root: PathBuf,
    /// Directory uploaded videos are written to.
    pub local_video_path: PathBuf,
    /// Upload size ceiling in bytes.
    pub max_video_size_bytes: u64,
    /// Connection settings for the future MongoDB-backed metadata store.
    pub mongodb_url: String,
    pub mongodb_database: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_video_size_mb = env::var("MAX_VIDEO_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_VIDEO_SIZE_MB.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_MAX_VIDEO_SIZE_MB);

        let config = Config {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            app_host: env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_APP_HOST.to_string()),
            app_port: env::var("APP_PORT")
                .unwrap_or_else(|_| DEFAULT_APP_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("APP_PORT must be a valid port number"))?,
            environment,
            cors_origins,
            local_storage_root: env::var("LOCAL_STORAGE_ROOT")
                .unwrap_or_else(|_| DEFAULT_STORAGE_ROOT.to_string())
                .into(),
            local_video_path: env::var("LOCAL_VIDEO_PATH")
                .unwrap_or_else(|_| DEFAULT_VIDEO_PATH.to_string())
                .into(),
            max_video_size_bytes: max_video_size_mb * 1024 * 1024,
            mongodb_url: env::var("MONGODB_URL")
                .unwrap_or_else(|_| DEFAULT_MONGODB_URL.to_string()),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| DEFAULT_MONGODB_DATABASE.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_video_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_VIDEO_SIZE_MB must be at least 1"));
        }
        if self.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must not be empty"));
        }
        if self.is_production() && self.cors_origins.contains(&"*".to_string()) {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        if self.local_video_path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("LOCAL_VIDEO_PATH must not be empty"));
        }
        Ok(())
    }
}
