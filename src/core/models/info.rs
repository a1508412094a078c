//! Wire types for `GET /api/tags` and the display pair handed to selection lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::size;

/// Name used when an entry arrives without one.
pub const UNKNOWN_NAME: &str = "unknown";

/// Body of `GET /api/tags`. A missing `models` field reads as an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One installed model. Fields other than `name` and `size` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    #[serde(default = "default_name")]
    pub name: String,
    /// Byte count as sent by the server; kept raw so odd types degrade to "unknown".
    #[serde(default)]
    pub size: Option<Value>,
}

fn default_name() -> String {
    UNKNOWN_NAME.to_string()
}

/// Label shown to the user and the value submitted on selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayPair {
    pub label: String,
    pub value: String,
}

impl DisplayPair {
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.label, &self.value)
    }
}

impl From<ModelEntry> for DisplayPair {
    fn from(entry: ModelEntry) -> Self {
        let size = size::format_size(entry.size.as_ref());
        DisplayPair {
            label: format!("{} ({})", entry.name, size),
            value: entry.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> TagsResponse {
        serde_json::from_str(body).expect("valid tags body")
    }

    #[test]
    fn missing_models_field_is_empty() {
        assert!(parse("{}").models.is_empty());
    }

    #[test]
    fn entry_defaults_name_and_size() {
        let resp = parse(r#"{"models": [{"digest": "abc"}]}"#);
        let pair = DisplayPair::from(resp.models[0].clone());
        assert_eq!(pair.as_tuple(), ("unknown (unknown)", "unknown"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let resp = parse(
            r#"{"models": [{
                "name": "qwen3:8b",
                "model": "qwen3:8b",
                "modified_at": "2025-05-01T10:00:00Z",
                "size": 2048,
                "details": {"family": "qwen3", "parameter_size": "8B"}
            }]}"#,
        );
        let pair = DisplayPair::from(resp.models[0].clone());
        assert_eq!(pair.label, "qwen3:8b (2.0 KB)");
        assert_eq!(pair.value, "qwen3:8b");
    }

    #[test]
    fn null_size_is_unknown() {
        let resp = parse(r#"{"models": [{"name": "phi3", "size": null}]}"#);
        let pair = DisplayPair::from(resp.models[0].clone());
        assert_eq!(pair.label, "phi3 (unknown)");
    }

    #[test]
    fn pair_serializes_as_label_and_value() {
        let pair = DisplayPair {
            label: "llama3 (3.7 GB)".into(),
            value: "llama3".into(),
        };
        let json = serde_json::to_value(&pair).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"label": "llama3 (3.7 GB)", "value": "llama3"})
        );
    }
}
