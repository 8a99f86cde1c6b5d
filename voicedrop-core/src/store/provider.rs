use anyhow::Result;
use async_trait::async_trait;

use super::types::{AudioPayload, UploadResult, UploadTarget};

/// Trait for audio object storage backends
#[async_trait]
pub trait AudioPublisher: Send + Sync {
    /// Write the payload as a single object at the target. Creates or
    /// overwrites; the write is billable and the object is readable at the
    /// target location as soon as this returns.
    async fn publish(&self, payload: AudioPayload, target: &UploadTarget) -> Result<UploadResult>;
}
