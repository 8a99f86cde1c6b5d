use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use voicedrop_core::{
    load_aws_config, AwsPolly, AwsS3, JobConfig, PipelineError, SpeechPipeline, UploadResult,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Sole exit point: one confirmation line on stdout, or one diagnostic
    // line on stderr and a non-zero status.
    match run().await {
        Ok(result) => println!("{result}"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<UploadResult, PipelineError> {
    setup_tracing().map_err(PipelineError::ConfigLoad)?;

    let job = JobConfig::from_env()?;
    let aws_config = load_aws_config().await;

    let pipeline = SpeechPipeline::new(
        Arc::new(AwsPolly::new(&aws_config)),
        Arc::new(AwsS3::new(&aws_config)),
    );
    pipeline.run(job.request, job.target).await
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Create trace directory in user's home
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".voicedrop").join("trace");
    fs::create_dir_all(&trace_dir)
        .with_context(|| format!("Failed to create trace directory {trace_dir:?}"))?;

    let log_file = trace_dir.join("voicedrop.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open trace log {log_file:?}"))?;

    // Logs go to the file only; stdout and stderr carry the job outcome
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
