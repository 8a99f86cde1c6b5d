//! Job configuration resolved from the process environment

use std::env;

use anyhow::{bail, Context, Result};
use aws_config::SdkConfig;

use crate::error::PipelineError;
use crate::store::UploadTarget;
use crate::synth::{AudioFormat, Engine, SynthesisRequest};

const DEFAULT_TEXT: &str = "Eres mi sol, mi único sol.\n\
    Me haces feliz cuando el cielo está gris.\n\
    Nunca sabrás, querida, cuánto te amo.\n\
    Por favor, no me quites mi sol.";
const DEFAULT_VOICE: &str = "Lupe";
const DEFAULT_LANGUAGE: &str = "es-US";

/// One fully-resolved pipeline job: what to say and where to put it.
///
/// Everything comes from `VOICEDROP_*` environment variables. The synthesis
/// parameters fall back to a built-in Spanish sample job; the destination
/// bucket and key have no sane default and must be set.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub request: SynthesisRequest,
    pub target: UploadTarget,
}

impl JobConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::resolve(|name| env::var(name).ok()).map_err(PipelineError::ConfigLoad)
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let text = lookup("VOICEDROP_TEXT").unwrap_or_else(|| DEFAULT_TEXT.to_string());
        if text.trim().is_empty() {
            bail!("VOICEDROP_TEXT is empty");
        }

        let engine = match lookup("VOICEDROP_ENGINE") {
            Some(raw) => raw.parse::<Engine>().with_context(|| {
                format!("Failed to parse VOICEDROP_ENGINE {raw:?} (expected standard or neural)")
            })?,
            None => Engine::Neural,
        };

        let output_format = match lookup("VOICEDROP_FORMAT") {
            Some(raw) => raw.parse::<AudioFormat>().with_context(|| {
                format!("Failed to parse VOICEDROP_FORMAT {raw:?} (expected mp3, ogg_vorbis or pcm)")
            })?,
            None => AudioFormat::Mp3,
        };

        let voice_id = lookup("VOICEDROP_VOICE").unwrap_or_else(|| DEFAULT_VOICE.to_string());
        let language_code =
            lookup("VOICEDROP_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let bucket = lookup("VOICEDROP_BUCKET").context("VOICEDROP_BUCKET is not set")?;
        if bucket.trim().is_empty() {
            bail!("VOICEDROP_BUCKET is empty");
        }

        let key = lookup("VOICEDROP_KEY").context("VOICEDROP_KEY is not set")?;
        if key.trim().is_empty() {
            bail!("VOICEDROP_KEY is empty");
        }

        Ok(Self {
            request: SynthesisRequest {
                text,
                voice_id,
                engine,
                language_code,
                output_format,
            },
            target: UploadTarget::new(bucket, key),
        })
    }
}

/// Resolve AWS credentials and region from the ambient environment. The
/// returned config is shared by every service client in the process.
pub async fn load_aws_config() -> SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await
}
