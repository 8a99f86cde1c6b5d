//! Object storage stage: write a buffered audio payload as one object

pub mod aws_s3;
pub mod mock;
pub mod provider;
pub mod types;

pub use aws_s3::AwsS3;
pub use provider::AudioPublisher;
pub use types::{AudioPayload, UploadResult, UploadTarget};
