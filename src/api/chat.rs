//! Chat completion endpoint.

use crate::client::ChatGptClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatModel};
use crate::transport::decode_json;

const CHAT_COMPLETIONS: [&str; 2] = ["chat", "completions"];

/// Model used by [`ChatGptClient::simple_send`].
pub const SIMPLE_SEND_MODEL: ChatModel = ChatModel::Gpt35Turbo;

impl ChatGptClient {
    /// Send a chat completion request.
    ///
    /// The request is validated first; an invalid request fails with
    /// [`ClientError::Validation`] and nothing is sent.
    pub async fn send(
        &self,
        request: &ChatCompletionRequest,
    ) -> ClientResult<ChatCompletionResponse> {
        request.validate()?;

        let response = self
            .transport
            .post_json(&CHAT_COMPLETIONS, request)
            .await?;
        decode_json(response).await
    }

    /// Send a single user message with default parameters and return the
    /// content of the first choice.
    pub async fn simple_send(&self, message: &str) -> ClientResult<String> {
        let request =
            ChatCompletionRequest::new(SIMPLE_SEND_MODEL, vec![ChatMessage::user(message)]);

        let response = self.send(&request).await?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ClientError::response_parsing("No choices in chat completion response", None)
            })
    }
}
