pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod synth;

// Convenience re-exports for the binary and integration tests.
pub use config::{load_aws_config, JobConfig};
pub use error::PipelineError;
pub use pipeline::SpeechPipeline;
pub use store::{AudioPublisher, AwsS3, UploadResult, UploadTarget};
pub use synth::{AwsPolly, SpeechSynthesizer, SynthesisRequest};
