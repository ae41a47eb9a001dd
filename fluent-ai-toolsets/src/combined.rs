//! Combining toolsets.
//!
//! [`CombinedToolset`] merges any number of toolsets, and opaque tools the
//! model API implements natively, into one toolset-shaped aggregate: one
//! manifest for the API, one dispatch entry point fanning calls back out to
//! the owning source.

use async_trait::async_trait;
use futures::future;
use serde_json::json;

use fluent_ai_tools::{
    CallOutcome, ManifestEntry, OpaqueTool, ToolCall, ToolError, ToolRegistry,
};

use crate::toolset::{BoxedToolset, Toolset};

/// Several toolsets and opaque tools presented as one.
///
/// The aggregate manifest lists every dispatchable source's entries in the
/// order the sources were added, followed by the opaque entries. Dispatch
/// routes each call to the first source that recognizes the name, so every
/// call is handled exactly once; calls nobody recognizes resolve to an
/// unknown-tool error outcome at this level.
///
/// ```ignore
/// use fluent_ai_toolsets::CombinedToolset;
/// use fluent_ai_tools::OpaqueTool;
///
/// let combined = CombinedToolset::new()
///     .add(weather_registry)
///     .add(math_registry)
///     .opaque(OpaqueTool::code_interpreter());
///
/// let manifest = combined.manifest();
/// ```
#[derive(Default)]
pub struct CombinedToolset {
    sources: Vec<BoxedToolset>,
    opaque: Vec<OpaqueTool>,
}

impl CombinedToolset {
    /// Create an empty combination.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            opaque: Vec::new(),
        }
    }

    /// Add a dispatchable toolset.
    #[must_use]
    pub fn add<T: Toolset + 'static>(mut self, toolset: T) -> Self {
        self.sources.push(Box::new(toolset));
        self
    }

    /// Add a boxed toolset.
    #[must_use]
    pub fn add_boxed(mut self, toolset: BoxedToolset) -> Self {
        self.sources.push(toolset);
        self
    }

    /// Add an opaque tool, passed through the manifest verbatim.
    #[must_use]
    pub fn opaque(mut self, tool: OpaqueTool) -> Self {
        self.opaque.push(tool);
        self
    }

    /// Get the number of dispatchable sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Check if the combination has no sources and no opaque tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.opaque.is_empty()
    }
}

#[async_trait]
impl Toolset for CombinedToolset {
    fn manifest(&self) -> Vec<ManifestEntry> {
        self.sources
            .iter()
            .flat_map(|source| source.manifest())
            .chain(self.opaque.iter().cloned().map(ManifestEntry::from))
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.sources.iter().any(|source| source.contains(name))
    }

    async fn dispatch(&self, calls: &[ToolCall]) -> Vec<CallOutcome> {
        // Route each call to the first source that recognizes the name.
        let mut batches: Vec<Vec<(usize, ToolCall)>> =
            (0..self.sources.len()).map(|_| Vec::new()).collect();
        let mut unrouted: Vec<usize> = Vec::new();
        for (position, call) in calls.iter().enumerate() {
            let owner = self
                .sources
                .iter()
                .position(|source| source.contains(call.tool_name()));
            match owner {
                Some(index) => batches[index].push((position, call.clone())),
                None => unrouted.push(position),
            }
        }

        let per_source = future::join_all(self.sources.iter().zip(&batches).map(
            |(source, batch)| async move {
                let owned: Vec<ToolCall> = batch.iter().map(|(_, call)| call.clone()).collect();
                source.dispatch(&owned).await
            },
        ))
        .await;

        // Reassemble in input order; every routed call yields one outcome.
        let mut slots: Vec<Option<CallOutcome>> = calls.iter().map(|_| None).collect();
        for (batch, outcomes) in batches.iter().zip(per_source) {
            for ((position, _), outcome) in batch.iter().zip(outcomes) {
                slots[*position] = Some(outcome);
            }
        }
        for position in unrouted {
            let call = &calls[position];
            let err = ToolError::unknown_tool(call.tool_name());
            slots[position] =
                Some(CallOutcome::new(call.id.as_str(), &json!({"error": err.message()})));
        }

        slots.into_iter().flatten().collect()
    }
}

impl std::fmt::Debug for CombinedToolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedToolset")
            .field("source_count", &self.sources.len())
            .field("opaque", &self.opaque)
            .finish()
    }
}

/// One source handed to [`combine_tools`]: either a dispatchable toolset or
/// an opaque pass-through tool.
pub enum ToolSource {
    /// A toolset whose calls are dispatched locally.
    Toolset(BoxedToolset),
    /// A vendor-native tool, merged into the manifest verbatim.
    Opaque(OpaqueTool),
}

impl From<ToolRegistry> for ToolSource {
    fn from(registry: ToolRegistry) -> Self {
        Self::Toolset(Box::new(registry))
    }
}

impl From<CombinedToolset> for ToolSource {
    fn from(combined: CombinedToolset) -> Self {
        Self::Toolset(Box::new(combined))
    }
}

impl From<OpaqueTool> for ToolSource {
    fn from(tool: OpaqueTool) -> Self {
        Self::Opaque(tool)
    }
}

/// Combine sources into one [`CombinedToolset`].
///
/// ```ignore
/// use fluent_ai_toolsets::combine_tools;
/// use fluent_ai_tools::OpaqueTool;
///
/// let combined = combine_tools([
///     weather_registry.into(),
///     OpaqueTool::code_interpreter().into(),
/// ]);
/// ```
#[must_use]
pub fn combine_tools<I>(sources: I) -> CombinedToolset
where
    I: IntoIterator<Item = ToolSource>,
{
    sources
        .into_iter()
        .fold(CombinedToolset::new(), |combined, source| match source {
            ToolSource::Toolset(toolset) => combined.add_boxed(toolset),
            ToolSource::Opaque(tool) => combined.opaque(tool),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_ai_tools::{tool, NoArgs};
    use pretty_assertions::assert_eq;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct Greeting {
        text: String,
    }

    fn registry_with(name: &str, description: &str) -> ToolRegistry {
        ToolRegistry::new().tool(
            name,
            tool()
                .describe(description)
                .run(|_: NoArgs| async { Ok(()) }),
        )
    }

    #[tokio::test]
    async fn empty_combination_has_nothing_to_say() {
        let combined = CombinedToolset::new();
        assert!(combined.is_empty());
        assert_eq!(combined.manifest(), vec![]);
        assert_eq!(combined.dispatch(&[]).await, vec![]);

        let combined = combine_tools([]);
        assert_eq!(
            combined
                .dispatch(&[ToolCall::new("id_1", "anything", "{}")])
                .await[0]
                .output,
            r#"{"error":"unknown tool 'anything'"}"#
        );
    }

    #[test]
    fn manifests_concatenate_in_source_order() {
        let combined = CombinedToolset::new()
            .add(registry_with("tool", "hello"))
            .add(registry_with("anotherTool", "world"));

        assert_eq!(
            serde_json::to_value(combined.manifest()).unwrap(),
            serde_json::json!([
                {
                    "type": "function",
                    "function": {
                        "name": "tool",
                        "description": "hello",
                        "parameters": {"type": "object", "properties": {}}
                    }
                },
                {
                    "type": "function",
                    "function": {
                        "name": "anotherTool",
                        "description": "world",
                        "parameters": {"type": "object", "properties": {}}
                    }
                }
            ])
        );
    }

    #[test]
    fn opaque_tools_follow_the_function_entries() {
        let combined = combine_tools([
            registry_with("local", "a local tool").into(),
            OpaqueTool::code_interpreter().into(),
            OpaqueTool::new("retrieval").into(),
        ]);

        let manifest = serde_json::to_value(combined.manifest()).unwrap();
        assert_eq!(manifest[0]["type"], "function");
        assert_eq!(manifest[1], serde_json::json!({"type": "code_interpreter"}));
        assert_eq!(manifest[2], serde_json::json!({"type": "retrieval"}));
    }

    #[tokio::test]
    async fn calls_route_to_their_owning_source_exactly_once() {
        let greetings = ToolRegistry::new().tool(
            "greet",
            tool()
                .input::<Greeting>()
                .run(|greeting| async move { Ok(format!("Hello {}", greeting.text)) }),
        );
        let farewells = ToolRegistry::new().tool(
            "farewell",
            tool()
                .input::<Greeting>()
                .run(|greeting| async move { Ok(format!("Bye {}", greeting.text)) }),
        );

        let combined = CombinedToolset::new().add(greetings).add(farewells);
        let outcomes = combined
            .dispatch(&[
                ToolCall::new("id_1", "farewell", r#"{"text": "moon"}"#),
                ToolCall::new("id_2", "greet", r#"{"text": "world"}"#),
            ])
            .await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].id, "id_1");
        assert_eq!(outcomes[0].output, "\"Bye moon\"");
        assert_eq!(outcomes[1].id, "id_2");
        assert_eq!(outcomes[1].output, "\"Hello world\"");
    }

    #[tokio::test]
    async fn unrecognized_names_resolve_once_at_the_aggregate() {
        let combined = CombinedToolset::new()
            .add(registry_with("known", "a tool"))
            .add(registry_with("other", "another tool"));

        let outcomes = combined
            .dispatch(&[
                ToolCall::new("id_1", "known", "{}"),
                ToolCall::new("id_2", "nowhere", "{}"),
            ])
            .await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[1].id, "id_2");
        assert_eq!(
            outcomes[1].output,
            r#"{"error":"unknown tool 'nowhere'"}"#
        );
    }

    #[tokio::test]
    async fn first_source_wins_a_shared_name() {
        let first = ToolRegistry::new().tool(
            "dup",
            tool().run(|_: NoArgs| async { Ok("first") }),
        );
        let second = ToolRegistry::new().tool(
            "dup",
            tool().run(|_: NoArgs| async { Ok("second") }),
        );

        let combined = CombinedToolset::new().add(first).add(second);
        let outcomes = combined
            .dispatch(&[ToolCall::new("id_1", "dup", "{}")])
            .await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].output, "\"first\"");
    }

    #[tokio::test]
    async fn combinations_nest() {
        let inner = CombinedToolset::new()
            .add(registry_with("inner_tool", "inside"))
            .opaque(OpaqueTool::file_search());
        let combined = CombinedToolset::new()
            .add(inner)
            .add(registry_with("outer_tool", "outside"));

        assert!(combined.contains("inner_tool"));
        assert!(combined.contains("outer_tool"));
        assert_eq!(combined.manifest().len(), 3);

        let outcomes = combined
            .dispatch(&[ToolCall::new("id_1", "inner_tool", "{}")])
            .await;
        assert_eq!(outcomes[0].output, "null");
    }

    #[test]
    fn debug_reports_shape() {
        let combined = CombinedToolset::new()
            .add(registry_with("a", "a"))
            .opaque(OpaqueTool::file_search());
        let debug = format!("{combined:?}");
        assert!(debug.contains("CombinedToolset"));
        assert!(debug.contains("source_count"));
    }
}
