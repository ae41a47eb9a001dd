//! Tool manifest types.
//!
//! A manifest is the ordered list of tool declarations advertised to the
//! model: locally dispatched function tools, and opaque tools the API
//! implements natively (which pass through the manifest verbatim and are
//! never dispatched here).

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One entry in the manifest handed to the model API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ManifestEntry {
    /// A locally dispatched function tool.
    Function(FunctionEntry),
    /// A vendor-native tool passed through unchanged.
    Opaque(OpaqueTool),
}

impl ManifestEntry {
    /// Get the function tool's name, if this entry is one.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Function(entry) => Some(&entry.function.name),
            Self::Opaque(_) => None,
        }
    }
}

impl From<FunctionEntry> for ManifestEntry {
    fn from(entry: FunctionEntry) -> Self {
        Self::Function(entry)
    }
}

impl From<OpaqueTool> for ManifestEntry {
    fn from(tool: OpaqueTool) -> Self {
        Self::Opaque(tool)
    }
}

/// Manifest entry for a function tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionEntry {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub entry_type: String,

    /// The function declaration.
    pub function: FunctionManifest,
}

impl FunctionEntry {
    /// Create a function entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        parameters: JsonValue,
    ) -> Self {
        Self {
            entry_type: "function".to_string(),
            function: FunctionManifest {
                name: name.into(),
                description,
                parameters,
            },
        }
    }
}

/// What the model sees about one function tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionManifest {
    /// Tool name (the dispatch key).
    pub name: String,

    /// Human-readable description of what the tool does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sanitized JSON Schema for the tool's parameters.
    pub parameters: JsonValue,
}

/// A tool the model API provides natively.
///
/// Opaque tools carry only their type tag. They are merged into the
/// manifest as-is and no call for them ever reaches a local registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpaqueTool {
    /// The vendor's tool type tag.
    #[serde(rename = "type")]
    pub tool_type: String,
}

impl OpaqueTool {
    /// Create an opaque tool with the given type tag.
    #[must_use]
    pub fn new(tool_type: impl Into<String>) -> Self {
        Self {
            tool_type: tool_type.into(),
        }
    }

    /// The hosted code-interpreter tool.
    #[must_use]
    pub fn code_interpreter() -> Self {
        Self::new("code_interpreter")
    }

    /// The hosted file-search tool.
    #[must_use]
    pub fn file_search() -> Self {
        Self::new("file_search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn function_entry_serializes_to_manifest_shape() {
        let entry = FunctionEntry::new(
            "test",
            Some("hello".to_string()),
            json!({"type": "object", "properties": {}}),
        );

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "type": "function",
                "function": {
                    "name": "test",
                    "description": "hello",
                    "parameters": {
                        "type": "object",
                        "properties": {}
                    }
                }
            })
        );
    }

    #[test]
    fn missing_description_is_omitted() {
        let entry = FunctionEntry::new("test", None, json!({"type": "object"}));
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value["function"].get("description").is_none());
    }

    #[test]
    fn opaque_tool_is_just_its_type_tag() {
        assert_eq!(
            serde_json::to_value(OpaqueTool::code_interpreter()).unwrap(),
            json!({"type": "code_interpreter"})
        );
        assert_eq!(
            serde_json::to_value(OpaqueTool::file_search()).unwrap(),
            json!({"type": "file_search"})
        );
        assert_eq!(
            serde_json::to_value(OpaqueTool::new("retrieval")).unwrap(),
            json!({"type": "retrieval"})
        );
    }

    #[test]
    fn manifest_entry_roundtrip() {
        let entries = vec![
            ManifestEntry::from(FunctionEntry::new("a", None, json!({"type": "object"}))),
            ManifestEntry::from(OpaqueTool::file_search()),
        ];

        let encoded = serde_json::to_string(&entries).unwrap();
        let decoded: Vec<ManifestEntry> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(entries, decoded);
        assert_eq!(decoded[0].function_name(), Some("a"));
        assert_eq!(decoded[1].function_name(), None);
    }
}
