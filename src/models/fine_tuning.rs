//! Fine-tuning job records.
//!
//! Job status is owned by the service. The client relays whatever status it
//! receives and enforces no transitions.

use super::list::ListResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a fine-tuning job.
///
/// Statuses this crate does not know are kept in
/// [`FineTuningJobStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FineTuningJobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    Other(String),
}

impl FineTuningJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ValidatingFiles => "validating_files",
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Other(status) => status,
        }
    }

    /// Whether the service will not move the job any further.
    ///
    /// Unknown statuses are never terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

impl From<String> for FineTuningJobStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "validating_files" => Self::ValidatingFiles,
            "queued" => Self::Queued,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(status),
        }
    }
}

impl From<FineTuningJobStatus> for String {
    fn from(status: FineTuningJobStatus) -> Self {
        match status {
            FineTuningJobStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// Number of training epochs: an explicit count or a service-chosen mode
/// such as `"auto"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NEpochs {
    Count(u32),
    Mode(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperparameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<NEpochs>,
}

/// Why a job failed. The service may send any field as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTuningJobError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// A fine-tuning job as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTuningJob {
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub created_at: i64,
    #[serde(default)]
    pub error: Option<FineTuningJobError>,
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
    #[serde(default)]
    pub finished_at: Option<i64>,
    #[serde(default)]
    pub hyperparameters: Option<Hyperparameters>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub result_files: Vec<String>,
    pub status: FineTuningJobStatus,
    #[serde(default)]
    pub trained_tokens: Option<u64>,
    #[serde(default)]
    pub training_file: String,
    #[serde(default)]
    pub validation_file: Option<String>,
}

impl FineTuningJob {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.created_at, 0)
    }

    pub fn finished_at_utc(&self) -> Option<DateTime<Utc>> {
        self.finished_at
            .and_then(|finished_at| DateTime::<Utc>::from_timestamp(finished_at, 0))
    }
}

/// Body of `POST /fine_tuning/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTuningRequest {
    pub model: String,
    pub training_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,
}

impl FineTuningRequest {
    pub fn new(model: impl Into<String>, training_file: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            training_file: training_file.into(),
            hyperparameters: None,
            suffix: None,
            validation_file: None,
        }
    }

    pub fn with_n_epochs(mut self, n_epochs: u32) -> Self {
        self.hyperparameters = Some(Hyperparameters {
            n_epochs: Some(NEpochs::Count(n_epochs)),
        });
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_validation_file(mut self, validation_file: impl Into<String>) -> Self {
        self.validation_file = Some(validation_file.into());
        self
    }
}

/// Body returned by `POST /fine_tuning/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTuningResponse {
    #[serde(default)]
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub created_at: i64,
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub result_files: Vec<String>,
    pub status: FineTuningJobStatus,
    #[serde(default)]
    pub validation_file: Option<String>,
    #[serde(default)]
    pub training_file: String,
}

/// A log entry emitted while a job runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTuningEvent {
    #[serde(default)]
    pub object: String,
    pub id: String,
    pub created_at: i64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(rename = "type", default)]
    pub event_type: String,
}

/// Body of `GET /fine_tuning/jobs`.
pub type FineTuningList = ListResponse<FineTuningJob>;

/// Body of `GET /fine_tuning/jobs/{id}/events`.
pub type FineTuningEventsList = ListResponse<FineTuningEvent>;
