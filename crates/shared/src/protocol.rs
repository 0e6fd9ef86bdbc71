//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of a successful `generateContent` reply.
///
/// Kept as loose JSON: any shape is accepted and lookups that do not match
/// simply come back empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerateContentResponse(Value);

impl From<Value> for GenerateContentResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, or `None` when any step is absent
    /// or has the wrong type.
    pub fn first_text(&self) -> Option<&str> {
        self.0
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
    }

    pub fn candidate_count(&self) -> usize {
        self.0
            .get("candidates")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
