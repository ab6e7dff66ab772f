//! Request-body contract for creating a message.
//!
//! The body must carry a `message` object; only its `name` and `content`
//! keys are read, anything else is ignored.

use serde_json::{Map, Value};

use crate::databases::messages::NewMessage;
use crate::error::ApiError;

pub const WRAPPER_KEY: &str = "message";

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Ok(NewMessage),
    Missing(Vec<&'static str>),
}

impl ValidationResult {
    pub fn into_result(self) -> Result<NewMessage, ApiError> {
        match self {
            ValidationResult::Ok(message) => Ok(message),
            ValidationResult::Missing(fields) => Err(ApiError::Validation(
                fields.into_iter().map(str::to_string).collect(),
            )),
        }
    }
}

/// Returns the nested `message` object. An absent, empty or non-object
/// value is a parameter-shape failure.
pub fn require_message(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    match body.get(WRAPPER_KEY) {
        Some(Value::Object(fields)) if !fields.is_empty() => Ok(fields),
        _ => Err(ApiError::MissingParameter(WRAPPER_KEY.to_string())),
    }
}

fn present(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Extracts the permitted fields. Blank, whitespace-only or non-string
/// values count as missing.
pub fn permit(fields: &Map<String, Value>) -> ValidationResult {
    match (present(fields, "name"), present(fields, "content")) {
        (Some(name), Some(content)) => ValidationResult::Ok(NewMessage { name, content }),
        (name, content) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("name");
            }
            if content.is_none() {
                missing.push("content");
            }
            ValidationResult::Missing(missing)
        }
    }
}

pub fn message_params(body: &Value) -> Result<NewMessage, ApiError> {
    permit(require_message(body)?).into_result()
}
