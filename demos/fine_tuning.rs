//! Fine-tuning example: upload a training file, start a job and follow it.
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example fine_tuning -- path/to/training.jsonl
//! ```
//!
//! The job keeps running on the service after this program exits.

use anyhow::Context;
use chatgpt_client::{ChatGptClient, ChatModel, FilePurpose, FineTuningRequest, ListOptions};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_secs(10);
const MAX_POLLS: usize = 6;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: fine_tuning <training.jsonl>")?;

    let client = ChatGptClient::from_env()?;

    let file = tokio::fs::File::open(&path)
        .await
        .with_context(|| format!("failed to open {path}"))?;
    let uploaded = client.upload_file(file, FilePurpose::FineTune).await?;
    println!(
        "Uploaded {} ({} bytes) as {}",
        uploaded.filename, uploaded.bytes, uploaded.id
    );

    let request = FineTuningRequest::new(ChatModel::Gpt35Turbo, &uploaded.id)
        .with_suffix("demo")
        .with_n_epochs(3);
    let job = client.create_fine_tuning_job(&request).await?;
    println!("Created job {} with status {:?}", job.id, job.status);

    for _ in 0..MAX_POLLS {
        tokio::time::sleep(POLL_INTERVAL).await;

        let current = client.retrieve_fine_tuning_job(&job.id).await?;
        println!("Job {} is {:?}", current.id, current.status);

        let events = client
            .list_fine_tuning_events(&job.id, Some(&ListOptions::new().limit(5)))
            .await?;
        for event in &events.data {
            println!("  [{}] {}", event.level, event.message);
        }

        if current.status.is_terminal() {
            if let Some(model) = current.fine_tuned_model {
                println!("Fine-tuned model: {model}");
            }
            return Ok(());
        }
    }

    println!("Job still running; check back later with its id: {}", job.id);
    Ok(())
}
