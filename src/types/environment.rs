//! Process configuration loaded once at startup

use std::env;
use std::time::Duration;

use anyhow::Context;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;

/// Immutable service configuration, read from the process environment once
/// at startup and passed into the handler state
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage-service credential (`AWS_ACCESS_KEY_ID`)
    pub aws_access_key_id: String,
    /// Storage-service credential (`AWS_SECRET_ACCESS_KEY`)
    pub aws_secret_access_key: String,
    /// S3 region (`REGION_NAME`)
    pub region_name: String,
    /// Destination bucket (`BUCKET_NAME`)
    pub bucket_name: String,
    /// Destination folder/key prefix (`OBJECTS_NAME`)
    pub objects_prefix: String,
    /// Optional S3 endpoint override for LocalStack/MinIO setups
    /// (`S3_ENDPOINT_URL`)
    pub endpoint_url: Option<String>,
    /// Listen port (`PORT`, defaults to 8000)
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        Ok(Self {
            aws_access_key_id: require_var("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_var("AWS_SECRET_ACCESS_KEY")?,
            region_name: require_var("REGION_NAME")?,
            bucket_name: require_var("BUCKET_NAME")?,
            objects_prefix: require_var("OBJECTS_NAME")?,
            endpoint_url: env::var("S3_ENDPOINT_URL").ok(),
            port,
        })
    }

    /// AWS S3 service configuration with retry and timeout settings
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let credentials = Credentials::from_keys(
            self.aws_access_key_id.clone(),
            self.aws_secret_access_key.clone(),
            None,
        );

        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region_name.clone()))
            .credentials_provider(credentials)
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.as_str());
        }

        let aws_config = loader.load().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // Path-style addressing for LocalStack/MinIO compatibility
        // https://github.com/awslabs/aws-sdk-rust/discussions/874
        if self.endpoint_url.is_some() {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }
}

fn require_var(name: &'static str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} environment variable is not set"))
}
