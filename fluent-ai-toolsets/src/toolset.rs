//! The toolset capability.
//!
//! A toolset is anything registry-shaped: it can describe its tools as
//! manifest entries, say whether it recognizes a tool name, and answer a
//! batch of calls. [`ToolRegistry`] is the base implementation; combined
//! toolsets implement the same trait, so combinations nest.

use async_trait::async_trait;
use fluent_ai_tools::{
    AssistantToolOutput, CallOutcome, ChatToolMessage, ManifestEntry, ToolCall, ToolRegistry,
};

/// A dispatchable collection of tools.
#[async_trait]
pub trait Toolset: Send + Sync {
    /// The manifest entries this toolset advertises, in order.
    fn manifest(&self) -> Vec<ManifestEntry>;

    /// Check whether this toolset recognizes a tool name.
    fn contains(&self, name: &str) -> bool;

    /// Resolve and execute a batch of calls.
    ///
    /// Implementations return exactly one outcome per call, lined up with
    /// the input positions, and never fail the batch because one call
    /// failed.
    async fn dispatch(&self, calls: &[ToolCall]) -> Vec<CallOutcome>;

    /// Dispatch and reshape outcomes for the chat-completions convention.
    ///
    /// An absent call list is treated as an empty batch.
    async fn process_chat_calls(&self, calls: Option<&[ToolCall]>) -> Vec<ChatToolMessage> {
        self.dispatch(calls.unwrap_or_default())
            .await
            .into_iter()
            .map(CallOutcome::into_chat_message)
            .collect()
    }

    /// Dispatch and reshape outcomes for the assistant-run convention.
    ///
    /// An absent call list is treated as an empty batch.
    async fn process_assistant_calls(
        &self,
        calls: Option<&[ToolCall]>,
    ) -> Vec<AssistantToolOutput> {
        self.dispatch(calls.unwrap_or_default())
            .await
            .into_iter()
            .map(CallOutcome::into_assistant_output)
            .collect()
    }
}

/// Boxed toolset for dynamic dispatch.
pub type BoxedToolset = Box<dyn Toolset>;

#[async_trait]
impl Toolset for ToolRegistry {
    fn manifest(&self) -> Vec<ManifestEntry> {
        ToolRegistry::manifest(self)
    }

    fn contains(&self, name: &str) -> bool {
        ToolRegistry::contains(self, name)
    }

    async fn dispatch(&self, calls: &[ToolCall]) -> Vec<CallOutcome> {
        ToolRegistry::dispatch(self, calls).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_ai_tools::{tool, NoArgs};

    fn ping_registry() -> ToolRegistry {
        ToolRegistry::new().tool("ping", tool().run(|_: NoArgs| async { Ok("pong") }))
    }

    #[tokio::test]
    async fn registry_is_a_toolset() {
        let toolset: BoxedToolset = Box::new(ping_registry());

        assert!(toolset.contains("ping"));
        assert!(!toolset.contains("pong"));
        assert_eq!(toolset.manifest().len(), 1);

        let outcomes = toolset
            .dispatch(&[ToolCall::new("id_1", "ping", "{}")])
            .await;
        assert_eq!(outcomes[0].output, "\"pong\"");
    }

    #[tokio::test]
    async fn provided_adapters_reshape_outcomes() {
        let toolset = ping_registry();

        let chat = Toolset::process_chat_calls(
            &toolset,
            Some(&[ToolCall::new("id_1", "ping", "{}")]),
        )
        .await;
        assert_eq!(chat[0].role, "tool");
        assert_eq!(chat[0].tool_call_id, "id_1");

        let assistant = Toolset::process_assistant_calls(&toolset, None).await;
        assert!(assistant.is_empty());
    }
}
