//! Orchestrates synthesize -> drain -> publish as one sequential run

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::store::{AudioPayload, AudioPublisher, UploadResult, UploadTarget};
use crate::synth::{SpeechSynthesizer, SynthesisRequest, SynthesizedSpeech};

/// Two-stage speech pipeline: a synthesizer produces an audio stream, the
/// orchestrator buffers it fully in memory, a publisher writes the buffer
/// as a single object.
pub struct SpeechPipeline {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    publisher: Arc<dyn AudioPublisher>,
}

impl SpeechPipeline {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, publisher: Arc<dyn AudioPublisher>) -> Self {
        Self {
            synthesizer,
            publisher,
        }
    }

    /// Run the pipeline to completion. The first failure is final; no
    /// stage is retried.
    pub async fn run(
        &self,
        request: SynthesisRequest,
        target: UploadTarget,
    ) -> Result<UploadResult, PipelineError> {
        info!(
            voice = %request.voice_id,
            engine = %request.engine,
            language = %request.language_code,
            format = %request.output_format,
            text_chars = request.text.chars().count(),
            "synthesizing speech"
        );
        let speech = self
            .synthesizer
            .synthesize(&request)
            .await
            .map_err(PipelineError::Synthesis)?;

        let payload = drain(speech).await?;
        debug!(
            bytes = payload.len(),
            content_type = %payload.content_type,
            "audio buffered"
        );

        info!(destination = %target.uri(), "publishing audio");
        let result = self
            .publisher
            .publish(payload, &target)
            .await
            .map_err(PipelineError::Publish)?;

        info!(
            bytes = result.bytes_written,
            location = %result.location,
            "pipeline complete"
        );
        Ok(result)
    }
}

/// Materialize the single-read audio stream into an owned buffer, counting
/// bytes exactly. The stream is consumed on success and dropped on failure,
/// so it is released on every path.
async fn drain(speech: SynthesizedSpeech) -> Result<AudioPayload, PipelineError> {
    let SynthesizedSpeech {
        audio,
        content_type,
    } = speech;

    let collected = audio.collect().await?;

    Ok(AudioPayload {
        bytes: collected.into_bytes().to_vec(),
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockPublisher;
    use crate::synth::mock::{MockSynthesizer, SynthBehavior};
    use crate::synth::{AudioFormat, Engine};
    use aws_smithy_types::byte_stream::ByteStream;

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            voice_id: "Lupe".to_string(),
            engine: Engine::Neural,
            language_code: "es-US".to_string(),
            output_format: AudioFormat::Mp3,
        }
    }

    fn target() -> UploadTarget {
        UploadTarget::new("b", "k")
    }

    fn pipeline(
        synthesizer: &MockSynthesizer,
        publisher: &MockPublisher,
    ) -> SpeechPipeline {
        SpeechPipeline::new(Arc::new(synthesizer.clone()), Arc::new(publisher.clone()))
    }

    #[tokio::test]
    async fn run_uploads_exactly_the_synthesized_bytes() {
        let audio = b"ID3\x04fake-mp3-frames".to_vec();
        let synthesizer = MockSynthesizer::new(SynthBehavior::Audio {
            bytes: audio.clone(),
            content_type: "audio/mpeg".to_string(),
        });
        let publisher = MockPublisher::new();

        let result = pipeline(&synthesizer, &publisher)
            .run(request("Hola"), target())
            .await
            .unwrap();

        assert_eq!(result.bytes_written, audio.len() as u64);
        assert_eq!(result.location, "s3://b/k");
        assert_eq!(
            result.to_string(),
            format!("Audio uploaded to s3://b/k ({} bytes)", audio.len())
        );

        let uploads = publisher.get_captured_uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].bytes, audio);
        assert_eq!(uploads[0].content_type, "audio/mpeg");
        assert_eq!(uploads[0].location, "s3://b/k");

        let requests = synthesizer.get_captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "Hola");
    }

    #[tokio::test]
    async fn empty_stream_is_a_zero_byte_payload_not_an_error() {
        let synthesizer = MockSynthesizer::new(SynthBehavior::Empty);
        let publisher = MockPublisher::new();

        let result = pipeline(&synthesizer, &publisher)
            .run(request("Hola"), target())
            .await
            .unwrap();

        assert_eq!(result.bytes_written, 0);
        assert_eq!(publisher.get_call_count(), 1);
    }

    #[tokio::test]
    async fn synthesis_failure_skips_the_publish_stage() {
        let synthesizer = MockSynthesizer::rejecting("unsupported language/voice pair");
        let publisher = MockPublisher::new();

        let error = pipeline(&synthesizer, &publisher)
            .run(request("Hola"), target())
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::Synthesis(_)));
        assert!(error.to_string().contains("SynthesisFailed"));
        assert!(error.to_string().contains("unsupported language/voice pair"));
        assert_eq!(publisher.get_call_count(), 0);
    }

    #[tokio::test]
    async fn publish_failure_names_its_stage() {
        let synthesizer = MockSynthesizer::speaking(b"audio");
        let publisher = MockPublisher::rejecting("AccessDenied");

        let error = pipeline(&synthesizer, &publisher)
            .run(request("Hola"), target())
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::Publish(_)));
        assert!(error.to_string().starts_with("PublishFailed"));
        assert!(error.to_string().contains("AccessDenied"));
    }

    #[tokio::test]
    async fn drain_counts_bytes_and_keeps_the_content_type() {
        let speech = SynthesizedSpeech {
            audio: ByteStream::from_static(b"hola"),
            content_type: "audio/ogg".to_string(),
        };

        let payload = drain(speech).await.unwrap();

        assert_eq!(payload.len(), 4);
        assert_eq!(payload.bytes, b"hola");
        assert_eq!(payload.content_type, "audio/ogg");
    }

    #[tokio::test]
    async fn drain_of_an_empty_stream_is_empty_not_an_error() {
        let speech = SynthesizedSpeech {
            audio: ByteStream::from_static(b""),
            content_type: "audio/mpeg".to_string(),
        };

        let payload = drain(speech).await.unwrap();

        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
    }
}
