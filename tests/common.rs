//! Test helper utilities for chatgpt-client integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use chatgpt_client::{
    ChatCompletionRequest, ChatGptClient, ChatMessage, ChatModel, ClientConfig,
};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "mock_api_key";
pub const TEST_ORGANIZATION: &str = "mock_organization_id";

/// Client pointed at the mock server, with key and organization configured.
pub fn create_test_client(mock_server: &MockServer) -> ChatGptClient {
    let config = ClientConfig::new(TEST_API_KEY)
        .with_base_url(mock_server.uri())
        .with_organization_id(TEST_ORGANIZATION);
    ChatGptClient::with_config(config).expect("test config should be valid")
}

/// Client pointed at the mock server without an organization.
pub fn create_test_client_without_organization(mock_server: &MockServer) -> ChatGptClient {
    let config = ClientConfig::new(TEST_API_KEY).with_base_url(mock_server.uri());
    ChatGptClient::with_config(config).expect("test config should be valid")
}

pub fn valid_request() -> ChatCompletionRequest {
    ChatCompletionRequest::new(ChatModel::Gpt35Turbo, vec![ChatMessage::user("Hello")])
}

/// Chat completion body with a single assistant choice.
pub fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-abcd",
        "object": "chat.completion",
        "created_at": 0,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 19, "completion_tokens": 47, "total_tokens": 66 }
    })
}

pub fn api_error_body(message: &str, error_type: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": null
        }
    })
}

pub fn file_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "file",
        "bytes": 140,
        "created_at": 1613779121,
        "filename": "mydata.jsonl",
        "purpose": "fine-tune",
        "status": "uploaded"
    })
}

pub fn job_body(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "fine_tuning.job",
        "id": id,
        "model": "gpt-3.5-turbo-0613",
        "created_at": 1689376978,
        "fine_tuned_model": null,
        "organization_id": "org-123",
        "result_files": [],
        "status": status,
        "validation_file": null,
        "training_file": "file-abc123",
        "hyperparameters": { "n_epochs": "auto" }
    })
}
