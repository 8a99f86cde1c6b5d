//! Speech synthesis stage: turn a text request into an audio byte stream

pub mod aws_polly;
pub mod mock;
pub mod provider;
pub mod types;

pub use aws_polly::AwsPolly;
pub use provider::SpeechSynthesizer;
pub use types::{AudioFormat, Engine, SynthesisRequest, SynthesizedSpeech};
