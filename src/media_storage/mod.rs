//! S3-based image storage operations

mod error;

use std::sync::Arc;

use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl, Client as S3Client};
use tracing::debug;

pub use error::{BucketError, BucketResult};

/// Media storage client for S3 operations
pub struct MediaStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    key_prefix: String,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for image storage
    /// * `key_prefix` - Folder prefix prepended to every object key
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String, key_prefix: String) -> Self {
        Self {
            s3_client,
            bucket_name,
            key_prefix,
        }
    }

    /// Maps a caller-supplied file name to its object key
    ///
    /// Plain concatenation with a single separating slash. No normalization
    /// and no uniqueness: two uploads with the same file name hit the same
    /// key and the later write wins.
    #[must_use]
    pub fn object_key(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.key_prefix)
    }

    /// Writes an object to the bucket
    ///
    /// # Arguments
    ///
    /// * `key` - The object key within the bucket
    /// * `body` - The full object payload
    /// * `content_type` - Declared content type of the payload, if any
    ///
    /// # Errors
    ///
    /// Returns `BucketError::S3Error` for S3 service errors,
    /// `BucketError::UpstreamError` for 5xx responses and
    /// `BucketError::AwsError` for SDK-level failures.
    pub async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> BucketResult<()> {
        debug!("Writing object: {key} ({} bytes)", body.len());

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(content_type.map(ToString::to_string))
            .send()
            .await?;

        Ok(())
    }

    /// Sets the canned ACL of an existing object to `public-read`
    ///
    /// # Errors
    ///
    /// Returns `BucketError::S3Error` for S3 service errors,
    /// `BucketError::UpstreamError` for 5xx responses and
    /// `BucketError::AwsError` for SDK-level failures.
    pub async fn set_public_read(&self, key: &str) -> BucketResult<()> {
        debug!("Setting public-read ACL: {key}");

        self.s3_client
            .put_object_acl()
            .bucket(&self.bucket_name)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await?;

        Ok(())
    }
}
