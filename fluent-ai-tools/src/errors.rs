//! Tool error types.
//!
//! Every failure raised while processing one call (a missing tool, an
//! argument string that is not JSON, arguments that fail validation, a
//! failing implementation) is represented here so the dispatch pipeline can
//! fold it into that call's outcome without touching the rest of the batch.

use thiserror::Error;

/// Errors raised while resolving and executing a single tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The call named a tool the registry does not contain.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// The call's argument string was not valid JSON.
    #[error("malformed tool arguments: {0}")]
    MalformedArguments(String),

    /// The decoded arguments did not match the tool's input schema.
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// The tool's implementation failed.
    #[error("{0}")]
    Execution(String),

    /// JSON serialization of a tool's return value failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolError {
    /// Create an unknown-tool error.
    #[must_use]
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a malformed-arguments error from a decode failure.
    #[must_use]
    pub fn malformed_arguments(err: &serde_json::Error) -> Self {
        Self::MalformedArguments(err.to_string())
    }

    /// Create an invalid-arguments error from a validation failure.
    #[must_use]
    pub fn invalid_arguments(err: &serde_json::Error) -> Self {
        Self::InvalidArguments(err.to_string())
    }

    /// Create an execution failure.
    #[must_use]
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error means the named tool does not exist.
    #[must_use]
    pub fn is_unknown_tool(&self) -> bool {
        matches!(self, Self::UnknownTool(_))
    }
}

impl From<String> for ToolError {
    fn from(s: String) -> Self {
        Self::execution(s)
    }
}

impl From<&str> for ToolError {
    fn from(s: &str) -> Self {
        Self::execution(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_displays_bare_message() {
        let err = ToolError::execution("Hello world");
        assert_eq!(err.message(), "Hello world");
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let err = ToolError::unknown_tool("missing");
        assert!(err.is_unknown_tool());
        assert_eq!(err.message(), "unknown tool 'missing'");
    }

    #[test]
    fn invalid_arguments_keeps_the_validation_text() {
        let decode = serde_json::from_value::<String>(serde_json::json!(123)).unwrap_err();
        let err = ToolError::invalid_arguments(&decode);
        assert!(err.message().contains("expected a string"));
    }

    #[test]
    fn from_string() {
        let err: ToolError = "boom".into();
        assert!(matches!(err, ToolError::Execution(_)));
    }

    #[test]
    fn from_anyhow() {
        let err: ToolError = anyhow::anyhow!("wrapped").into();
        assert_eq!(err.message(), "wrapped");
    }
}
