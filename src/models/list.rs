//! List envelopes and pagination options.

use serde::{Deserialize, Serialize};

/// Envelope shared by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub object: String,
    pub data: Vec<T>,
    /// The files listing does not report this field.
    #[serde(default)]
    pub has_more: bool,
}

/// Cursor pagination for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Identifier of the last item from the previous page.
    pub after: Option<String>,
    /// Number of items to retrieve. The service defaults to 20.
    pub limit: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query string for these options, including the leading `?`.
    ///
    /// Returns an empty string when neither field is set. Each field is
    /// encoded on its own, so `limit` is sent even without a cursor.
    pub fn encode(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(after) = &self.after {
            query.append_pair("after", after);
        }
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }

        let encoded = query.finish();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{encoded}")
        }
    }
}

/// Encode optional list options, treating `None` like empty options.
pub(crate) fn encode_options(options: Option<&ListOptions>) -> String {
    options.map(ListOptions::encode).unwrap_or_default()
}
