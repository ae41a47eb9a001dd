//! The finished tool descriptor.
//!
//! A [`Tool`] pairs an input schema with a type-erased implementation and an
//! optional description. It is produced by the builder in [`crate::builder`]
//! and is immutable from then on; registries share it by reference.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::{errors::ToolError, schema};

/// Boxed future returned by tool handlers.
pub(crate) type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Type-erased tool implementation: raw argument value in, result value out.
pub(crate) type ToolHandler =
    dyn Fn(JsonValue) -> PinnedFuture<Result<JsonValue, ToolError>> + Send + Sync;

/// A callable tool: input schema, implementation, optional description.
///
/// Built with [`crate::tool()`]; see the builder for the construction
/// contract. Cloning is cheap (the implementation is shared).
#[derive(Clone)]
pub struct Tool {
    pub(crate) schema: JsonValue,
    pub(crate) description: Option<String>,
    pub(crate) handler: Arc<ToolHandler>,
}

impl Tool {
    /// Get the tool's description, if one was set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the parameters descriptor advertised in the manifest.
    ///
    /// This is the stored schema with the `$schema` meta-schema pointer
    /// scrubbed at every depth and a `properties` member guaranteed.
    #[must_use]
    pub fn parameters(&self) -> JsonValue {
        let mut parameters = schema::deep_remove_key(&self.schema, "$schema");
        schema::ensure_properties(&mut parameters);
        parameters
    }

    /// Validate `args` against the input schema and run the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArguments`] when `args` does not match
    /// the input type, or whatever the implementation itself fails with.
    pub async fn invoke(&self, args: JsonValue) -> Result<JsonValue, ToolError> {
        (self.handler)(args).await
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish()
    }
}
