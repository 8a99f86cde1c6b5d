use aws_smithy_types::byte_stream::ByteStream;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Synthesis engine offered to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Engine {
    Standard,
    Neural,
}

/// Encoded audio container requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AudioFormat {
    Mp3,
    #[strum(to_string = "ogg_vorbis", serialize = "ogg")]
    OggVorbis,
    Pcm,
}

impl AudioFormat {
    /// Canonical MIME type, used when the service does not declare one
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::OggVorbis => "audio/ogg",
            AudioFormat::Pcm => "audio/pcm",
        }
    }
}

/// One synthesis job, constructed once per run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub engine: Engine,
    pub language_code: String,
    pub output_format: AudioFormat,
}

/// Synthesized audio as returned by a provider: an open single-read byte
/// stream and the content type it should be stored under. The stream must
/// be drained exactly once; dropping it releases the underlying connection.
#[derive(Debug)]
pub struct SynthesizedSpeech {
    pub audio: ByteStream,
    pub content_type: String,
}
