//! HTTP transport for the remote API.
//!
//! [`Transport`] turns a prepared request into one authenticated call and
//! normalizes the response: success hands back the raw response for the
//! endpoint to decode, failure becomes a [`ClientError`].

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::logging::{log_debug, log_trace};
use crate::models::list::{encode_options, ListOptions};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// Header carrying the organization identifier (`OpenAI-Organization`).
pub const ORGANIZATION_HEADER: &str = "openai-organization";

/// Error envelope returned by the service on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub param: Option<serde_json::Value>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

/// Authenticated HTTP transport shared by every endpoint.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Transport {
    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, TLS settings).
    pub fn with_http_client(http: reqwest::Client, config: Arc<ClientConfig>) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint given as path segments, e.g.
    /// `["files", file_id]`.
    ///
    /// Each segment is percent-encoded, so an identifier containing `/`, `?`
    /// or `#` stays a single segment.
    pub fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(self.config.normalized_base_url())
            .map_err(|e| ClientError::configuration(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::configuration("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> ClientResult<Response> {
        self.send(self.request(Method::GET, self.url(segments)?)).await
    }

    /// GET a list endpoint, appending pagination options as the query string.
    pub async fn get_page(
        &self,
        segments: &[&str],
        options: Option<&ListOptions>,
    ) -> ClientResult<Response> {
        let mut url = self.url(segments)?;
        let query = encode_options(options);
        if let Some(query) = query.strip_prefix('?') {
            url.set_query(Some(query));
        }
        self.send(self.request(Method::GET, url)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> ClientResult<Response> {
        self.send(self.request(Method::DELETE, self.url(segments)?))
            .await
    }

    /// POST without a body.
    pub async fn post(&self, segments: &[&str]) -> ClientResult<Response> {
        self.send(self.request(Method::POST, self.url(segments)?))
            .await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<Response> {
        self.send(self.request(Method::POST, self.url(segments)?).json(body))
            .await
    }

    /// POST a multipart form; its boundary content type is kept.
    pub async fn post_multipart(
        &self,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> ClientResult<Response> {
        self.send(
            self.request(Method::POST, self.url(segments)?)
                .multipart(form),
        )
        .await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let mut request = builder
            .build()
            .map_err(|e| ClientError::configuration(format!("Failed to build request: {e}")))?;
        self.apply_headers(&mut request)?;
        self.execute(request).await
    }

    /// Attach authentication and content negotiation headers.
    ///
    /// `Content-Type` defaults to JSON only when the request does not already
    /// carry one.
    pub fn apply_headers(&self, request: &mut Request) -> ClientResult<()> {
        let auth = build_auth_headers(&self.config)?;
        let headers = request.headers_mut();
        headers.extend(auth);
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(())
    }

    /// Send one request and map non-success statuses to errors.
    pub async fn execute(&self, request: Request) -> ClientResult<Response> {
        log_debug!(
            method = %request.method(),
            url = %request.url(),
            has_organization = self.config.organization_id.is_some(),
            "Dispatching API request"
        );

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ClientError::request_failed)?;

        log_debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Received API response"
        );

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        Ok(response)
    }
}

/// `Authorization` and, if configured, organization headers for `config`.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] if the key or organization cannot be
/// encoded as a header value.
pub fn build_auth_headers(config: &ClientConfig) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|e| ClientError::configuration(format!("Invalid API key format: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    if let Some(organization_id) = config.organization_id.as_deref() {
        let value = HeaderValue::from_str(organization_id).map_err(|e| {
            ClientError::configuration(format!("Invalid organization ID format: {e}"))
        })?;
        headers.insert(ORGANIZATION_HEADER, value);
    }

    Ok(headers)
}

/// Handle non-success HTTP responses.
///
/// A body that is not a structured error envelope yields the decode failure
/// itself rather than a generic API error.
async fn handle_error_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return ClientError::response_parsing(
                format!("Failed to read error response: {e}"),
                Some(Box::new(e)),
            )
        }
    };

    log_trace!(status = status, body = %body, "API error response body");

    match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(envelope) => ClientError::Api {
            status,
            url,
            error_type: envelope.error.error_type.unwrap_or_default(),
            message: envelope.error.message.unwrap_or_default(),
            param: envelope.error.param,
            code: envelope.error.code,
        },
        Err(e) => ClientError::from(e),
    }
}

/// Read a success response body and decode it into `T`.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let body = read_text(response).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Read a success response body as text.
pub async fn read_text(response: Response) -> ClientResult<String> {
    response.text().await.map_err(|e| {
        ClientError::response_parsing(format!("Failed to read response: {e}"), Some(Box::new(e)))
    })
}
