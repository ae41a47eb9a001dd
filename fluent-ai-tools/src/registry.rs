//! Tool registry and the tool-call dispatch pipeline.
//!
//! A [`ToolRegistry`] owns a set of named [`Tool`]s, derives the manifest
//! advertised to the model, and answers batches of tool calls. Every call in
//! a batch is resolved, validated, and executed independently, so a failing
//! call only affects its own outcome, never the batch.

use std::sync::Arc;

use futures::future;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::calls::{AssistantToolOutput, CallOutcome, ChatToolMessage, ToolCall};
use crate::errors::ToolError;
use crate::manifest::{FunctionEntry, ManifestEntry};
use crate::tool::Tool;

/// Hook observing per-call failures.
///
/// Returning `Some(value)` replaces the error payload sent to the model;
/// returning `None` keeps the error's own message.
type ErrorHook = Arc<dyn Fn(&ToolError) -> Option<JsonValue> + Send + Sync>;

/// A named collection of tools with a dispatch pipeline over it.
///
/// Built with a consuming chain; the registry is read-only once built, and
/// cloning shares the underlying tools.
///
/// ```ignore
/// use fluent_ai_tools::{tool, NoArgs, ToolRegistry};
///
/// let registry = ToolRegistry::new()
///     .tool("ping", tool().run(|_: NoArgs| async { Ok("pong") }));
///
/// // Hand `registry.manifest()` to the model API; later feed the tool
/// // calls it produces to `registry.process_chat_calls(...)`.
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry {
    entries: IndexMap<String, Tool>,
    on_error: Option<ErrorHook>,
}

impl ToolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            on_error: None,
        }
    }

    /// Add a tool under `name`.
    ///
    /// Manifest order is the order tools are added.
    ///
    /// # Panics
    ///
    /// Panics if a tool with the same name is already registered, or if the
    /// tool's parameters descriptor does not describe an object.
    #[must_use]
    pub fn tool(mut self, name: impl Into<String>, tool: Tool) -> Self {
        let name = name.into();
        assert!(
            !self.entries.contains_key(&name),
            "tool '{name}' is already registered"
        );
        let parameters = tool.parameters();
        assert!(
            parameters.get("type").and_then(JsonValue::as_str) == Some("object"),
            "tool '{name}' parameters must describe an object, got: {parameters}"
        );
        self.entries.insert(name, tool);
        self
    }

    /// Set the failure hook for this registry's dispatches.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ToolError) -> Option<JsonValue> + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Derive the manifest advertised to the model, in registration order.
    #[must_use]
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.entries
            .iter()
            .map(|(name, tool)| {
                FunctionEntry::new(
                    name.as_str(),
                    tool.description().map(String::from),
                    tool.parameters(),
                )
                .into()
            })
            .collect()
    }

    /// Check if a tool exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.entries.get(name)
    }

    /// Get all tool names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Get the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve and execute a batch of calls.
    ///
    /// All calls run concurrently; the returned outcomes line up with the
    /// input positions. Failures are folded into the failing call's outcome
    /// as a JSON-encoded `{"error": ...}` payload.
    pub async fn dispatch(&self, calls: &[ToolCall]) -> Vec<CallOutcome> {
        future::join_all(calls.iter().map(|call| self.execute(call))).await
    }

    /// Dispatch and reshape outcomes for the chat-completions convention.
    ///
    /// An absent call list is treated as an empty batch.
    pub async fn process_chat_calls(
        &self,
        calls: Option<&[ToolCall]>,
    ) -> Vec<ChatToolMessage> {
        self.dispatch(calls.unwrap_or_default())
            .await
            .into_iter()
            .map(CallOutcome::into_chat_message)
            .collect()
    }

    /// Dispatch and reshape outcomes for the assistant-run convention.
    ///
    /// An absent call list is treated as an empty batch.
    pub async fn process_assistant_calls(
        &self,
        calls: Option<&[ToolCall]>,
    ) -> Vec<AssistantToolOutput> {
        self.dispatch(calls.unwrap_or_default())
            .await
            .into_iter()
            .map(CallOutcome::into_assistant_output)
            .collect()
    }

    async fn execute(&self, call: &ToolCall) -> CallOutcome {
        tracing::debug!(
            target: "tool_calls",
            "calling tool '{}' with args: {}",
            call.tool_name(),
            call.function.arguments
        );

        match self.try_execute(call).await {
            Ok(value) => {
                tracing::debug!(
                    target: "tool_calls",
                    "tool '{}' completed successfully",
                    call.tool_name()
                );
                CallOutcome::new(call.id.as_str(), &value)
            }
            Err(err) => {
                tracing::warn!(
                    target: "tool_calls",
                    "tool '{}' failed: {}",
                    call.tool_name(),
                    err
                );
                let payload = self.error_payload(&err);
                CallOutcome::new(call.id.as_str(), &serde_json::json!({"error": payload}))
            }
        }
    }

    async fn try_execute(&self, call: &ToolCall) -> Result<JsonValue, ToolError> {
        let tool = self
            .entries
            .get(call.tool_name())
            .ok_or_else(|| ToolError::unknown_tool(call.tool_name()))?;
        let args: JsonValue = serde_json::from_str(&call.function.arguments)
            .map_err(|err| ToolError::malformed_arguments(&err))?;
        tool.invoke(args).await
    }

    fn error_payload(&self, err: &ToolError) -> JsonValue {
        if let Some(hook) = &self.on_error {
            if let Some(payload) = hook(err) {
                return payload;
            }
        }
        JsonValue::String(err.message())
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .field("has_on_error", &self.on_error.is_some())
            .finish()
    }
}
