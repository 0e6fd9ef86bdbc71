use serde::{Deserialize, Serialize};

/// Error object returned by the generative API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

impl ApiError {
    /// `STATUS: message` when both are present, falling back to the raw body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                let status = envelope.error.status.unwrap_or_default();
                let message = envelope
                    .error
                    .message
                    .unwrap_or_else(|| body.to_string());
                if status.is_empty() {
                    message
                } else {
                    format!("{status}: {message}")
                }
            }
            Err(_) => body.to_string(),
        }
    }
}
