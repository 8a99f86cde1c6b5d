use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully buffered audio ready for upload. The byte length is derived from
/// the buffer itself, so the reported size always matches what is sent.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl AudioPayload {
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Destination object for a publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTarget {
    pub bucket: String,
    pub key: String,
}

impl UploadTarget {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Location URI of the stored object
    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// Acknowledged write; the terminal output of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub bytes_written: u64,
    pub location: String,
}

impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Audio uploaded to {} ({} bytes)",
            self.location, self.bytes_written
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_uri_joins_bucket_and_key() {
        let target = UploadTarget::new("b", "polly/output.mp3");
        assert_eq!(target.uri(), "s3://b/polly/output.mp3");
    }

    #[test]
    fn result_displays_the_confirmation_line() {
        let result = UploadResult {
            bytes_written: 17,
            location: "s3://b/k".to_string(),
        };
        assert_eq!(result.to_string(), "Audio uploaded to s3://b/k (17 bytes)");
    }

    #[test]
    fn payload_length_tracks_the_buffer() {
        let payload = AudioPayload {
            bytes: vec![0u8; 42],
            content_type: "audio/mpeg".to_string(),
        };
        assert_eq!(payload.len(), 42);
        assert!(!payload.is_empty());
    }
}
