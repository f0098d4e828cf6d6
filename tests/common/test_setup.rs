use std::sync::Arc;

use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use image_upload_service::{handlers, media_storage::MediaStorage, state::AppState};

use super::s3_stub::S3Stub;

pub const TEST_BUCKET: &str = "test-menu-images";
pub const TEST_PREFIX: &str = "menus";
pub const TEST_REGION: &str = "us-east-1";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup: the real router wired to an in-process S3 stub
pub struct TestSetup {
    pub router: Router,
    pub s3_stub: S3Stub,
    pub media_storage: Arc<MediaStorage>,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let (s3_stub, endpoint_url) = S3Stub::spawn().await;

        // Retries disabled so forced-failure tests see exactly one attempt
        let credentials = Credentials::from_keys("test", "test", None);
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(endpoint_url.as_str())
            .region(Region::new(TEST_REGION))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let s3_config: aws_sdk_s3::Config = (&sdk_config).into();
        let s3_config = s3_config.to_builder().force_path_style(true).build();
        let s3_client = Arc::new(S3Client::from_conf(s3_config));

        let media_storage = Arc::new(MediaStorage::new(
            s3_client,
            TEST_BUCKET.to_string(),
            TEST_PREFIX.to_string(),
        ));

        let router = handlers::routes().with_state(AppState {
            media_storage: media_storage.clone(),
        });

        Self {
            router,
            s3_stub,
            media_storage,
        }
    }

    pub async fn send_multipart_request(
        &self,
        route: &str,
        boundary: &str,
        body: Vec<u8>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
