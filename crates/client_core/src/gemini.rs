//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    error::ApiError,
    protocol::{GenerateContentRequest, GenerateContentResponse},
};
use thiserror::Error;
use url::Url;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ApiCallError {
    #[error("invalid generative API endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("generative API request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("generative API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("failed to decode generative API response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[async_trait]
pub trait GenerativeTextApi: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiCallError>;
}

pub struct MissingGenerativeTextApi;

#[async_trait]
impl GenerativeTextApi for MissingGenerativeTextApi {
    async fn generate_content(
        &self,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiCallError> {
        Err(ApiCallError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "generative API is unavailable".to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.endpoint, &settings.model, &settings.api_key)
    }

    /// `{endpoint}/models/{model}:generateContent` without the key query parameter.
    pub fn method_url(&self) -> Result<Url, ApiCallError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        Url::parse(&raw).map_err(|source| ApiCallError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

#[async_trait]
impl GenerativeTextApi for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiCallError> {
        let method_url = self.method_url()?;
        tracing::debug!(url = %method_url, "sending generateContent request");

        let mut url = method_url;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| ApiCallError::Transport(err.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiCallError::Transport(err.without_url()))?;

        if !status.is_success() {
            return Err(ApiCallError::Status {
                status,
                message: ApiError::describe(&body),
            });
        }

        // Only a body that is not JSON at all fails here; shape is checked by `first_text`.
        serde_json::from_str(&body).map_err(ApiCallError::Decode)
    }
}

#[cfg(test)]
#[path = "tests/gemini_tests.rs"]
mod tests;
