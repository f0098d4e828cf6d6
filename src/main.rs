use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use image_upload_service::{media_storage::MediaStorage, server, types::Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let s3_client = Arc::new(S3Client::from_conf(config.s3_client_config().await));
    let media_storage = Arc::new(MediaStorage::new(
        s3_client,
        config.bucket_name.clone(),
        config.objects_prefix.clone(),
    ));

    server::start(&config, media_storage).await
}
