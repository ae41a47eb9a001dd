//! Schema derivation and sanitizing.
//!
//! This module bridges [`schemars`] type descriptions into the parameter
//! descriptors advertised to the model, and provides the recursive key
//! scrub applied before a descriptor is embedded in a manifest.

use schemars::{gen::SchemaSettings, JsonSchema};
use serde_json::{Map, Value as JsonValue};

/// Remove every object member named `key` from a descriptor tree.
///
/// Walks nested objects and drops the matching member at each level before
/// descending into the remaining object-valued members. Arrays are passed
/// through untouched, including any objects inside them. The input is not
/// mutated; a scrubbed copy is returned.
///
/// Removing a key that is not present anywhere is a no-op, and the scrub is
/// idempotent.
///
/// # Example
///
/// ```rust
/// use fluent_ai_tools::schema::deep_remove_key;
///
/// let schema = serde_json::json!({
///     "$schema": "http://json-schema.org/draft-07/schema#",
///     "type": "object",
///     "properties": {}
/// });
///
/// let scrubbed = deep_remove_key(&schema, "$schema");
/// assert!(scrubbed.get("$schema").is_none());
/// ```
#[must_use]
pub fn deep_remove_key(value: &JsonValue, key: &str) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let mut scrubbed = Map::with_capacity(map.len());
            for (name, member) in map {
                if name == key {
                    continue;
                }
                let member = if member.is_object() {
                    deep_remove_key(member, key)
                } else {
                    member.clone()
                };
                scrubbed.insert(name.clone(), member);
            }
            JsonValue::Object(scrubbed)
        }
        other => other.clone(),
    }
}

/// Derive the JSON Schema descriptor for a tool input type.
///
/// Produces a draft-07 schema with all subschemas inlined, so the descriptor
/// is self-contained (no `$ref`/`definitions` indirection, which function
/// manifests do not support). The root `title` that [`schemars`] derives from
/// the type name is dropped; the tool's name and description already carry
/// that information.
#[must_use]
pub fn object_schema<A: JsonSchema>() -> JsonValue {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;
    let root = settings.into_generator().into_root_schema_for::<A>();
    let mut value =
        serde_json::to_value(root).expect("root schema serialization failed");
    if let Some(map) = value.as_object_mut() {
        map.remove("title");
    }
    value
}

/// Guarantee an object descriptor carries a `properties` member.
///
/// Derived schemas for field-less inputs omit `properties` entirely, but the
/// manifest format expects every parameters descriptor to spell it out.
pub(crate) fn ensure_properties(value: &mut JsonValue) {
    if let Some(map) = value.as_object_mut() {
        let is_object = map.get("type").and_then(JsonValue::as_str) == Some("object");
        if is_object && !map.contains_key("properties") {
            map.insert("properties".to_string(), JsonValue::Object(Map::new()));
        }
    }
}
