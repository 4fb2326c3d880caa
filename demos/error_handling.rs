//! Error handling example demonstrating error variants and categories.
//!
//! This example shows how to:
//! - Catch request validation failures before any network call
//! - Route errors by category
//! - Decide whether a failed call is worth retrying
//!
//! # Running
//!
//! ```bash
//! # Offline demonstration
//! cargo run --example error_handling
//!
//! # Also make a real call with an invalid API key:
//! cargo run --example error_handling -- --live
//! ```
//!
//! # Error Categories
//!
//! | Category | Examples | Action |
//! |----------|----------|--------|
//! | Client | Missing key, invalid request | Fix the caller |
//! | Transient | 429, 5xx | Retry with backoff |
//! | External | Other API errors, network failures | Log, maybe retry |

use chatgpt_client::{
    ChatCompletionRequest, ChatGptClient, ChatMessage, ChatModel, ClientConfig, ClientError,
    ErrorCategory, ValidationError,
};

/// Shows the validation errors raised for bad requests.
fn demonstrate_validation() {
    println!("=== Request Validation ===\n");

    let requests = vec![
        (
            "unknown model",
            ChatCompletionRequest::new("gpt-9000", vec![ChatMessage::user("Hi")]),
        ),
        (
            "no messages",
            ChatCompletionRequest::new(ChatModel::Gpt4o, Vec::new()),
        ),
        (
            "unknown role",
            ChatCompletionRequest::new(ChatModel::Gpt4o, vec![ChatMessage::new("robot", "Hi")]),
        ),
        (
            "temperature 3.0",
            ChatCompletionRequest::new(ChatModel::Gpt4o, vec![ChatMessage::user("Hi")])
                .with_temperature(3.0),
        ),
        (
            "presence penalty -2.5",
            ChatCompletionRequest::new(ChatModel::Gpt4o, vec![ChatMessage::user("Hi")])
                .with_presence_penalty(-2.5),
        ),
    ];

    for (label, request) in requests {
        match request.validate() {
            Ok(()) => println!("{label}: valid"),
            Err(error) => println!("{label}: {error} ({error:?})"),
        }
    }
    println!();
}

/// Print detailed information about an error
fn print_error_info(name: &str, error: &ClientError) {
    println!("{}:", name);
    println!("  Display: {}", error);
    println!("  Category: {:?}", error.category());
    println!("  Retryable: {}", error.is_retryable());
    if let Some(status) = error.status() {
        println!("  HTTP status: {}", status);
    }
    println!();
}

/// Shows category-based routing over locally constructed errors.
fn demonstrate_error_routing() {
    println!("=== Category-Based Error Routing ===\n");

    let errors = vec![
        ("ApiKeyRequired", ClientError::ApiKeyRequired),
        (
            "Validation",
            ClientError::from(ValidationError::InvalidTemperature),
        ),
        (
            "Configuration",
            ClientError::configuration("Invalid base URL"),
        ),
    ];

    for (name, error) in errors {
        print_error_info(name, &error);

        let action = match error.category() {
            ErrorCategory::Client => "Fix the request or configuration",
            ErrorCategory::Transient => "Retry with exponential backoff",
            ErrorCategory::External => "Log and investigate",
        };
        println!("  Action: {}\n", action);
    }

    // Missing keys are caught when the client is built
    match ChatGptClient::with_config(ClientConfig::new("")) {
        Ok(_) => println!("Unexpected: empty key accepted"),
        Err(error) => print_error_info("Empty API key", &error),
    }
}

/// Makes a real call that the API will reject.
async fn demonstrate_real_error_handling() -> Result<(), ClientError> {
    println!("=== Real Error Handling Example ===\n");

    let client = ChatGptClient::new("sk-invalid-key-for-demo")?;

    println!("Attempting request with invalid API key...\n");

    match client.simple_send("Hello!").await {
        Ok(content) => println!("Unexpected success: {}", content),
        Err(error) => {
            print_error_info("Live call", &error);

            if let ClientError::Api {
                error_type, param, code, ..
            } = &error
            {
                println!("  API error type: {}", error_type);
                println!("  Param: {:?}", param);
                println!("  Code: {:?}", code);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let run_live = std::env::args().any(|arg| arg == "--live");

    demonstrate_validation();
    demonstrate_error_routing();

    if run_live {
        demonstrate_real_error_handling().await?;
    } else {
        println!("=== Live Test Skipped ===\n");
        println!("Run with --live flag to test with actual API calls:");
        println!("  cargo run --example error_handling -- --live\n");
    }

    Ok(())
}
