//! AWS S3 storage implementation.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::error::{AppError, Result};
use crate::storage::{ResultStore, StoredObject};

/// Result store writing into a single S3 bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Create a new S3 store for `bucket`.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create the store from a loaded AWS SDK configuration.
    pub fn from_sdk_config(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> Self {
        Self::new(Client::new(config), bucket)
    }
}

#[async_trait]
impl ResultStore for S3Store {
    async fn put_json(&self, key: &str, body: Vec<u8>) -> Result<StoredObject> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| AppError::s3(DisplayErrorContext(&e)))?;

        let location = format!("s3://{}/{}", self.bucket, key);
        info!("Wrote {} bytes to {}", size, location);

        Ok(StoredObject { location, size })
    }
}
