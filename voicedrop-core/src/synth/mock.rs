use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use aws_smithy_types::byte_stream::ByteStream;

use super::provider::SpeechSynthesizer;
use super::types::{SynthesisRequest, SynthesizedSpeech};

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum SynthBehavior {
    /// Return an empty audio stream
    #[default]
    Empty,
    /// Return the given bytes as the audio stream
    Audio {
        bytes: Vec<u8>,
        content_type: String,
    },
    /// Fail every request, as a service rejection would
    Failure { message: String },
}

/// Mock synthesizer for testing the pipeline without a billable service call
#[derive(Clone)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<SynthBehavior>>,
    call_count: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: SynthBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that speaks the given bytes with an audio/mpeg content type
    pub fn speaking(bytes: &[u8]) -> Self {
        Self::new(SynthBehavior::Audio {
            bytes: bytes.to_vec(),
            content_type: "audio/mpeg".to_string(),
        })
    }

    /// Mock that rejects every request with the given message
    pub fn rejecting(message: &str) -> Self {
        Self::new(SynthBehavior::Failure {
            message: message.to_string(),
        })
    }

    pub fn set_behavior(&self, behavior: SynthBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_captured_requests(&self) -> Vec<SynthesisRequest> {
        self.captured_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedSpeech> {
        self.captured_requests.lock().unwrap().push(request.clone());
        *self.call_count.lock().unwrap() += 1;

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            SynthBehavior::Empty => Ok(SynthesizedSpeech {
                audio: ByteStream::from_static(b""),
                content_type: "audio/mpeg".to_string(),
            }),
            SynthBehavior::Audio {
                bytes,
                content_type,
            } => Ok(SynthesizedSpeech {
                audio: ByteStream::from(bytes),
                content_type,
            }),
            SynthBehavior::Failure { message } => Err(anyhow::anyhow!(message)),
        }
    }
}
