use anyhow::Result;
use async_trait::async_trait;

use super::types::{SynthesisRequest, SynthesizedSpeech};

/// Trait for speech synthesis backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the request into an open audio stream. The call is
    /// billable even if the stream is never read; dropping the stream
    /// releases the underlying transport on any path.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedSpeech>;
}
