//! # chatgpt-client
//!
//! Async client for the ChatGPT HTTP API: chat completions, file management and
//! fine-tuning jobs.
//!
//! ## Key Features
//!
//! - **Typed records**: request and response structs mirroring the API's JSON schemas
//! - **Local validation**: chat completion requests are checked before any network call
//! - **Structured errors**: validation, transport and API failures are distinct variants
//! - **No hidden behaviour**: one HTTP round trip per call, no retries, no caching
//!
//! ## Example
//!
//! ```rust,no_run
//! use chatgpt_client::{ChatCompletionRequest, ChatGptClient, ChatMessage, ChatModel};
//!
//! # async fn example() -> chatgpt_client::ClientResult<()> {
//! let client = ChatGptClient::new("your-api-key")?;
//!
//! let request = ChatCompletionRequest::new(
//!     ChatModel::Gpt35Turbo,
//!     vec![
//!         ChatMessage::system("You are a helpful assistant."),
//!         ChatMessage::user("Hello, how are you?"),
//!     ],
//! )
//! .with_temperature(0.7);
//!
//! let response = client.send(&request).await?;
//! println!("{}", response.first_content().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::ChatGptClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult, ErrorCategory, ValidationError};
pub use validation::validate;

pub use models::{
    // Chat completions
    ChatChoice,
    ChatCompletionRequest,
    ChatCompletionResponse,
    ChatMessage,
    ChatModel,
    ChatRole,
    ChatUsage,
    // Files
    DeleteFileResponse,
    File,
    FileList,
    FilePurpose,
    FileStatus,
    // Fine-tuning
    FineTuningEvent,
    FineTuningEventsList,
    FineTuningJob,
    FineTuningJobError,
    FineTuningJobStatus,
    FineTuningList,
    FineTuningRequest,
    FineTuningResponse,
    Hyperparameters,
    // Pagination
    ListOptions,
    ListResponse,
    NEpochs,
};
