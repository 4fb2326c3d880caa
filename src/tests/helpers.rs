//! Test helper utilities for chatgpt-client unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::ClientConfig;
use crate::models::{ChatCompletionRequest, ChatMessage, ChatModel};

/// The canonical request that passes every validation check.
pub fn valid_request() -> ChatCompletionRequest {
    ChatCompletionRequest::new(ChatModel::Gpt35Turbo, vec![ChatMessage::user("Hello")])
}

/// Configuration pointing at a local address with an organization set.
pub fn create_test_config() -> ClientConfig {
    ClientConfig::new("mock_api_key")
        .with_base_url("http://localhost:8080/v1")
        .with_organization_id("mock_organization_id")
}
