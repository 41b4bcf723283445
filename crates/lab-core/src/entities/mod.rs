//! Entity structs for lab authoring as they travel over the wire.
//!
//! Field names follow the persistence service's `camelCase` JSON. Documents
//! may identify themselves with `_id` or `id`; [`effective_id`] picks the one
//! that wins. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod embed;
mod lab;
mod test_case;
mod version;

pub use embed::LabEmbed;
pub use lab::Lab;
pub use test_case::{Comparator, FALLBACK_CASE_NAME, TestCase};
pub use version::{
    DEFAULT_ENTRY_FN_NAME, DEFAULT_NODE_VERSION, DEFAULT_TIMEOUT_MS, LabVersion, ReferenceSolution,
    RunnerConfig, TIMEOUT_MS_RANGE,
};

/// A JSON object value, as used for test inputs and expected outputs.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Resolve the identifier of a document carrying `_id` and/or `id`.
///
/// `_id` wins when present, then `id`, then the empty string.
#[must_use]
pub fn effective_id<'a>(mongo_id: Option<&'a str>, id: Option<&'a str>) -> &'a str {
    mongo_id.or(id).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::effective_id;

    #[test]
    fn mongo_id_wins() {
        assert_eq!(effective_id(Some("m1"), Some("i1")), "m1");
    }

    #[test]
    fn falls_back_to_id() {
        assert_eq!(effective_id(None, Some("i1")), "i1");
    }

    #[test]
    fn empty_when_neither_present() {
        assert_eq!(effective_id(None, None), "");
    }
}
