//! AWS Polly speech synthesis backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::types::{Engine as PollyEngine, LanguageCode, OutputFormat, VoiceId};
use aws_sdk_polly::Client;

use super::provider::SpeechSynthesizer;
use super::types::{AudioFormat, Engine, SynthesisRequest, SynthesizedSpeech};

/// Speech synthesizer backed by AWS Polly
pub struct AwsPolly {
    client: Client,
}

impl AwsPolly {
    /// Create a Polly client from the shared AWS configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl From<Engine> for PollyEngine {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Standard => PollyEngine::Standard,
            Engine::Neural => PollyEngine::Neural,
        }
    }
}

impl From<AudioFormat> for OutputFormat {
    fn from(format: AudioFormat) -> Self {
        match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
            AudioFormat::OggVorbis => OutputFormat::OggVorbis,
            AudioFormat::Pcm => OutputFormat::Pcm,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for AwsPolly {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedSpeech> {
        // Voice and language pass through as-is: unsupported combinations
        // are rejected by the service at call time, not validated here.
        let response = self
            .client
            .synthesize_speech()
            .text(&request.text)
            .voice_id(VoiceId::from(request.voice_id.as_str()))
            .engine(request.engine.into())
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .output_format(request.output_format.into())
            .send()
            .await
            .context("Failed to synthesize speech")?;

        tracing::debug!(
            characters = response.request_characters(),
            content_type = ?response.content_type(),
            "synthesis stream open"
        );

        let content_type = response
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| request.output_format.content_type().to_string());

        Ok(SynthesizedSpeech {
            audio: response.audio_stream,
            content_type,
        })
    }
}
