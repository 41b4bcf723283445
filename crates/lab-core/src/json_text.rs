//! Text ⇄ JSON object conversion for test case editing.
//!
//! Authors edit `input` and `expected` as free text. Blank text means `{}`;
//! anything else must parse to a JSON object.

use thiserror::Error;

use crate::entities::JsonObject;

/// Why a piece of JSON text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonTextError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(String),

    /// The text is valid JSON but not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Parse editor text into a JSON object.
///
/// # Errors
///
/// Returns [`JsonTextError::Syntax`] for malformed text and
/// [`JsonTextError::NotAnObject`] for scalars and arrays.
pub fn parse_object(text: &str) -> Result<JsonObject, JsonTextError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(JsonObject::new());
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(serde_json::Value::Array(_)) => Err(JsonTextError::NotAnObject("an array")),
        Ok(serde_json::Value::Null) => Err(JsonTextError::NotAnObject("null")),
        Ok(_) => Err(JsonTextError::NotAnObject("a scalar")),
        Err(e) => Err(JsonTextError::Syntax(e.to_string())),
    }
}

/// Pretty-print an object for editing, two-space indented.
#[must_use]
pub fn format_object(value: &JsonObject) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| String::from("{}"))
}
