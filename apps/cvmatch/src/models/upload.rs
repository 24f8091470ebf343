use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::job::MatchResult;

/// Body of `POST {candidates}/upload`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub candidate_id: Option<i64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub job_matches: Option<Vec<MatchResult>>,
    #[serde(default)]
    pub top_match: Option<MatchResult>,
    /// Present when `success` is false.
    #[serde(flatten)]
    pub error: ErrorBody,
}

/// Error payload shared by failed uploads and non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

/// Field-scoped server messages, in either of the two shapes the backend emits.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldErrors {
    List(Vec<FieldMessages>),
    ByField(Map<String, Value>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldMessages {
    pub field: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl FieldErrors {
    /// `(field, messages)` pairs in server order.
    pub fn entries(&self) -> Vec<(String, Vec<String>)> {
        match self {
            FieldErrors::List(items) => items
                .iter()
                .map(|item| (item.field.clone(), item.messages.clone()))
                .collect(),
            FieldErrors::ByField(map) => map
                .iter()
                .map(|(field, value)| (field.clone(), value_messages(value)))
                .collect(),
        }
    }
}

fn value_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_text).collect(),
        Value::Null => Vec::new(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
