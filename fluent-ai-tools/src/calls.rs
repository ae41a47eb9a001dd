//! Tool-call wire types.
//!
//! The model API sends a batch of [`ToolCall`] values naming a tool and
//! carrying a JSON-encoded argument string. Each call resolves to one
//! [`CallOutcome`], the canonical internal shape, which the boundary
//! adapters reshape into either the chat-completion tool message or the
//! assistant-run tool output the caller hands back to the API.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolCall {
    /// Correlation id for the call.
    pub id: String,

    /// The function to call.
    pub function: ToolCallFunction,
}

impl ToolCall {
    /// Create a call request.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            function: ToolCallFunction {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    /// Get the name of the tool being called.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.function.name
    }
}

/// The function half of a tool call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolCallFunction {
    /// The name of the tool to invoke.
    pub name: String,

    /// The arguments as a JSON-encoded object string.
    pub arguments: String,
}

/// The resolved output for one call: correlation id plus the JSON-encoded
/// result (or `{"error": ...}` payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// Correlation id of the call this answers.
    pub id: String,

    /// JSON-encoded output string.
    pub output: String,
}

impl CallOutcome {
    /// Create an outcome by encoding `output` as JSON.
    #[must_use]
    pub fn new(id: impl Into<String>, output: &JsonValue) -> Self {
        Self {
            id: id.into(),
            output: serde_json::to_string(output)
                .expect("JSON value serialization failed"),
        }
    }

    /// Reshape into the chat-completion tool message.
    #[must_use]
    pub fn into_chat_message(self) -> ChatToolMessage {
        ChatToolMessage {
            tool_call_id: self.id,
            role: "tool".to_string(),
            content: self.output,
        }
    }

    /// Reshape into the assistant-run tool output.
    #[must_use]
    pub fn into_assistant_output(self) -> AssistantToolOutput {
        AssistantToolOutput {
            tool_call_id: self.id,
            output: self.output,
        }
    }
}

/// Tool result message for the chat-completions convention.
///
/// Sent back in the conversation as a `role: "tool"` message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatToolMessage {
    /// Id of the call this message answers.
    pub tool_call_id: String,

    /// Always `"tool"`.
    pub role: String,

    /// JSON-encoded result or error payload.
    pub content: String,
}

/// Tool result for the assistant-run convention.
///
/// Submitted to continue a run waiting on tool outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantToolOutput {
    /// Id of the call this output answers.
    pub tool_call_id: String,

    /// JSON-encoded result or error payload.
    pub output: String,
}
