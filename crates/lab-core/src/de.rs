//! Lenient deserializers for documents loaded from the persistence service.
//!
//! Stored versions predate some of the current invariants, so loading must
//! tolerate `null` collections, stray non-string hint entries, and test
//! inputs saved as arrays or scalars without failing the whole editor load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::entities::JsonObject;

/// Deserialize a list of strings, dropping entries that are not strings.
///
/// `null` or a non-array value yields an empty list.
pub fn strings_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserialize a JSON object. Anything else, including `null`, becomes `{}`.
pub fn object_or_empty<'de, D>(deserializer: D) -> Result<JsonObject, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(JsonObject::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => {
            tracing::warn!(
                found = kind_of(&other),
                "stored test field is not a JSON object; loading it as {{}}"
            );
            Ok(JsonObject::new())
        }
    }
}

/// Deserialize any value, mapping `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
