//! Error types for client operations.
//!
//! Every operation returns [`ClientResult<T>`]. Failures fall into three groups:
//! - Construction errors (missing API key, unusable header values)
//! - Validation errors, raised before any network call
//! - Transport errors (network failure, non-2xx status, undecodable body)
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use chatgpt_client::{ClientError, ValidationError};
//!
//! fn handle_error(err: ClientError) {
//!     if err.is_validation() {
//!         // Fix the request; resending it unchanged will fail the same way
//!         return;
//!     }
//!     if err.is_retryable() {
//!         println!("Transient failure, safe to retry: {}", err);
//!     }
//!     if let Some(ValidationError::InvalidModel) = err.validation_error() {
//!         println!("Pick a supported model");
//!     }
//! }
//! ```

use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`ClientError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller made a mistake it can fix (missing key, invalid request).
    Client,

    /// The remote service or the network failed.
    External,

    /// Temporary failures; a retry with backoff may succeed.
    Transient,
}

/// A chat completion request failed local validation.
///
/// Checks run in a fixed order and only the first violation is reported,
/// see [`crate::validation::validate`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("invalid model")]
    InvalidModel,

    #[error("no messages provided")]
    NoMessages,

    #[error("invalid role. Only `user`, `system` and `assistant` are supported")]
    InvalidRole,

    #[error("invalid temperature. 0 <= temperature <= 2")]
    InvalidTemperature,

    #[error("invalid presence penalty. -2 <= presence penalty <= 2")]
    InvalidPresencePenalty,

    #[error("invalid frequency penalty. -2 <= frequency penalty <= 2")]
    InvalidFrequencyPenalty,
}

/// Convenient result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building or executing an API call.
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ApiKeyRequired` | Client | No |
/// | `Configuration` | Client | No |
/// | `Validation` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `Api` (429, 5xx) | Transient | Yes |
/// | `Api` (other) | External | No |
/// | `ResponseParsing` | External | No |
/// | `FileRead` | Client | No |
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client was constructed without an API key.
    #[error("API Key is required")]
    ApiKeyRequired,

    /// Configuration is present but unusable (e.g. a key that is not a valid header value).
    #[error("Client configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The chat completion request was rejected before it was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP request could not be completed.
    #[error("Request failed: {message}")]
    RequestFailed {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status and a structured error body.
    #[error(
        "api request failed: status Code: {status}, URL: {url}, Error type: {error_type}, Message: {message}"
    )]
    Api {
        status: u16,
        url: String,
        error_type: String,
        message: String,
        param: Option<serde_json::Value>,
        code: Option<serde_json::Value>,
    },

    /// A response body could not be read or decoded.
    ///
    /// Also returned for non-success responses whose body is not a structured
    /// error envelope: the decode failure is surfaced as-is.
    #[error("Response parsing failed: {message}")]
    ResponseParsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The upload source could not be read.
    #[error("Failed to read upload source: {source}")]
    FileRead {
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiKeyRequired => ErrorCategory::Client,
            Self::Configuration { .. } => ErrorCategory::Client,
            Self::Validation(_) => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::Api { status, .. } if is_transient_status(*status) => ErrorCategory::Transient,
            Self::Api { .. } => ErrorCategory::External,
            Self::ResponseParsing { .. } => ErrorCategory::External,
            Self::FileRead { .. } => ErrorCategory::Client,
        }
    }

    /// Whether resending the same call could succeed.
    ///
    /// The library never retries on its own; this is guidance for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::Api { status, .. } => is_transient_status(*status),
            _ => false,
        }
    }

    /// Whether the request was rejected locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The specific validation failure, if this is a validation error.
    pub fn validation_error(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(kind) => Some(*kind),
            _ => None,
        }
    }

    /// HTTP status of a remote API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn request_failed(source: reqwest::Error) -> Self {
        Self::RequestFailed {
            message: source.to_string(),
            source,
        }
    }

    pub fn response_parsing(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ResponseParsing {
            message: message.into(),
            source,
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::response_parsing(format!("Invalid response: {err}"), Some(Box::new(err)))
    }
}
