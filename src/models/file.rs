//! Remote file metadata.

use super::list::ListResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing state of an uploaded file. Deprecated by the service.
///
/// Values this crate does not know are kept in [`FileStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    Uploaded,
    Processed,
    Error,
    Other(String),
}

impl FileStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processed => "processed",
            Self::Error => "error",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for FileStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "uploaded" => Self::Uploaded,
            "processed" => Self::Processed,
            "error" => Self::Error,
            _ => Self::Other(status),
        }
    }
}

impl From<FileStatus> for String {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// Intended use of an uploaded file.
///
/// The service adds purposes over time (`batch`, `vision`, ...); those decode
/// as [`FilePurpose::Other`] and are sent back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilePurpose {
    FineTune,
    FineTuneResults,
    Assistants,
    AssistantsOutput,
    Other(String),
}

impl FilePurpose {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FineTune => "fine-tune",
            Self::FineTuneResults => "fine-tune-results",
            Self::Assistants => "assistants",
            Self::AssistantsOutput => "assistants_output",
            Self::Other(purpose) => purpose,
        }
    }
}

impl From<String> for FilePurpose {
    fn from(purpose: String) -> Self {
        match purpose.as_str() {
            "fine-tune" => Self::FineTune,
            "fine-tune-results" => Self::FineTuneResults,
            "assistants" => Self::Assistants,
            "assistants_output" => Self::AssistantsOutput,
            _ => Self::Other(purpose),
        }
    }
}

impl From<&str> for FilePurpose {
    fn from(purpose: &str) -> Self {
        Self::from(purpose.to_string())
    }
}

impl From<FilePurpose> for String {
    fn from(purpose: FilePurpose) -> Self {
        match purpose {
            FilePurpose::Other(purpose) => purpose,
            known => known.as_str().to_string(),
        }
    }
}

/// A file stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub bytes: u64,
    pub created_at: i64,
    pub filename: String,
    pub purpose: FilePurpose,
    #[serde(default)]
    pub status: Option<FileStatus>,
    #[serde(default)]
    pub status_details: Option<String>,
}

impl File {
    /// Creation time, if the timestamp is in range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.created_at, 0)
    }
}

/// Body of `GET /files`.
pub type FileList = ListResponse<File>;

/// Body returned by `DELETE /files/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFileResponse {
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub deleted: bool,
}
