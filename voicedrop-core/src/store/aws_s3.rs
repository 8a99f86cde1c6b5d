//! AWS S3 object storage backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::provider::AudioPublisher;
use super::types::{AudioPayload, UploadResult, UploadTarget};

/// Audio publisher backed by AWS S3
pub struct AwsS3 {
    client: Client,
}

impl AwsS3 {
    /// Create an S3 client from the shared AWS configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl AudioPublisher for AwsS3 {
    async fn publish(&self, payload: AudioPayload, target: &UploadTarget) -> Result<UploadResult> {
        let bytes_written = payload.len();

        // Content type and length are declared explicitly rather than left
        // to remote inference.
        let output = self
            .client
            .put_object()
            .bucket(&target.bucket)
            .key(&target.key)
            .content_type(&payload.content_type)
            .content_length(bytes_written as i64)
            .body(ByteStream::from(payload.bytes))
            .send()
            .await
            .with_context(|| format!("Failed to upload object to {}", target.uri()))?;

        tracing::debug!(etag = ?output.e_tag(), "put object acknowledged");

        Ok(UploadResult {
            bytes_written,
            location: target.uri(),
        })
    }
}
