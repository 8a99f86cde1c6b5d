use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::provider::AudioPublisher;
use super::types::{AudioPayload, UploadResult, UploadTarget};

/// One captured publish call
#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub location: String,
}

/// Mock publisher for testing the pipeline without a billable write
#[derive(Clone, Default)]
pub struct MockPublisher {
    fail_with: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
    captured_uploads: Arc<Mutex<Vec<CapturedUpload>>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that refuses every write with the given message
    pub fn rejecting(message: &str) -> Self {
        let publisher = Self::new();
        publisher.set_failure(Some(message.to_string()));
        publisher
    }

    pub fn set_failure(&self, message: Option<String>) {
        *self.fail_with.lock().unwrap() = message;
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_captured_uploads(&self) -> Vec<CapturedUpload> {
        self.captured_uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioPublisher for MockPublisher {
    async fn publish(&self, payload: AudioPayload, target: &UploadTarget) -> Result<UploadResult> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(message));
        }

        let bytes_written = payload.len();
        self.captured_uploads.lock().unwrap().push(CapturedUpload {
            bytes: payload.bytes,
            content_type: payload.content_type,
            location: target.uri(),
        });

        Ok(UploadResult {
            bytes_written,
            location: target.uri(),
        })
    }
}
