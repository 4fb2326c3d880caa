use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::logging::log_debug;
use crate::transport::Transport;
use std::sync::Arc;

/// Client for the chat completion, files and fine-tuning endpoints.
///
/// Configuration is fixed at construction. Clones share the configuration and
/// the underlying connection pool, so one client can serve concurrent calls.
/// Each endpoint method performs exactly one HTTP round trip; drop the future
/// (or wrap it in `tokio::time::timeout`) to cancel it.
#[derive(Debug, Clone)]
pub struct ChatGptClient {
    pub(crate) transport: Transport,
}

impl ChatGptClient {
    /// Create a client for the default base URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::ApiKeyRequired`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::ApiKeyRequired`] if the configured key is
    /// empty, regardless of the other fields.
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client that sends through a caller-built `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> ClientResult<Self> {
        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            has_organization = config.organization_id.is_some(),
            "Creating API client"
        );

        Ok(Self {
            transport: Transport::with_http_client(http, Arc::new(config)),
        })
    }

    /// Create a client from `OPENAI_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> ClientResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }
}
