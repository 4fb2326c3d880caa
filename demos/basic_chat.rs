//! Basic chat example demonstrating a single request/response round trip.
//!
//! This example shows how to:
//! - Build a client from the environment
//! - Send a one-line prompt with `simple_send`
//! - Send a full chat completion request and read token usage
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! # Optional: OPENAI_ORGANIZATION, OPENAI_BASE_URL
//! RUST_LOG=chatgpt_client=debug cargo run --example basic_chat
//! ```

use chatgpt_client::{ChatCompletionRequest, ChatGptClient, ChatMessage, ChatModel};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reads OPENAI_API_KEY, OPENAI_ORGANIZATION and OPENAI_BASE_URL
    let client = ChatGptClient::from_env()?;

    println!("Sending simple prompt...");
    let answer = client
        .simple_send("What is the capital of France? Answer in one sentence.")
        .await?;
    println!("\nSimple answer: {answer}");

    let request = ChatCompletionRequest::new(
        ChatModel::Gpt4oMini,
        vec![
            ChatMessage::system("You are a helpful assistant. Be concise."),
            ChatMessage::user("Name three rivers in Europe."),
        ],
    )
    .with_temperature(0.2)
    .with_max_tokens(100);

    println!("\nSending chat completion request...");
    let response = client.send(&request).await?;

    println!("\nResponse: {}", response.first_content().unwrap_or_default());
    println!(
        "\nToken usage: {} input + {} output = {} total",
        response.usage.prompt_tokens, response.usage.completion_tokens, response.usage.total_tokens
    );

    Ok(())
}
