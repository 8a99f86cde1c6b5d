use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("ConfigLoadFailed: {0:#}")]
    ConfigLoad(anyhow::Error),

    #[error("SynthesisFailed: {0:#}")]
    Synthesis(anyhow::Error),

    #[error("StreamReadFailed: {0:#}")]
    StreamRead(anyhow::Error),

    #[error("PublishFailed: {0:#}")]
    Publish(anyhow::Error),
}

impl From<aws_smithy_types::byte_stream::error::Error> for PipelineError {
    fn from(source: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::StreamRead(anyhow!(source))
    }
}
