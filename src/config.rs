//! Client configuration.
//!
//! A [`ClientConfig`] is validated once, when a client is constructed, and is
//! read-only afterwards.

use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default origin for API requests.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
/// Environment variable holding the organization identifier.
pub const ORGANIZATION_ENV: &str = "OPENAI_ORGANIZATION";

/// Connection settings for a [`crate::ChatGptClient`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests, without a trailing slash.
    pub base_url: String,

    /// API key (required).
    pub api_key: String,

    /// Organization ID (optional), sent as the `OpenAI-Organization` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl ClientConfig {
    /// Configuration for the default base URL with no organization.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            organization_id: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Check that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiKeyRequired`] if the API key is empty,
    /// whatever the other fields hold. Any other value is left for the
    /// service to judge.
    pub fn validate(&self) -> ClientResult<()> {
        if self.api_key.is_empty() {
            return Err(ClientError::ApiKeyRequired);
        }
        Ok(())
    }

    /// Load configuration from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and
    /// `OPENAI_ORGANIZATION`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiKeyRequired`] if `OPENAI_API_KEY` is unset or empty.
    pub fn from_env() -> ClientResult<Self> {
        let mut config = Self::new(std::env::var(API_KEY_ENV).unwrap_or_default());
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config.organization_id = std::env::var(ORGANIZATION_ENV)
            .ok()
            .filter(|org| !org.is_empty());

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            has_organization = config.organization_id.is_some(),
            "Client configuration loaded from environment"
        );

        Ok(config)
    }

    /// Base URL with any trailing slashes removed.
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// The API key never shows up in debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
