//! Fluent tool construction.
//!
//! [`tool()`] starts a staged builder. Each configuration step (input
//! schema, description, implementation) can be taken at most once, and the
//! type system enforces it: `input` moves the builder to a type that no
//! longer offers `input`, `describe` moves it to a type that no longer
//! offers `describe`, and `run` consumes the builder and returns the
//! finished [`Tool`], which offers no builder steps at all. Setting the
//! input therefore always happens before `run`, which is what lets the
//! implementation receive the parsed input type directly.
//!
//! ```ignore
//! use fluent_ai_tools::tool;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct WeatherQuery {
//!     city: String,
//! }
//!
//! let get_weather = tool()
//!     .input::<WeatherQuery>()
//!     .describe("Gets the weather")
//!     .run(|query| async move {
//!         Ok(serde_json::json!({ "city": query.city, "weather": "sunny" }))
//!     });
//! ```

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::ToolError;
use crate::schema;
use crate::tool::{PinnedFuture, Tool};

/// Input placeholder for tools that take no arguments.
///
/// Deserializes from any JSON object, so a tool built without `input`
/// accepts the `"{}"` argument string the model sends for parameterless
/// calls.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NoArgs {}

/// Start building a tool.
///
/// The builder starts with an empty object schema, no description, and no
/// implementation; `run` (or `run_sync`) is the one mandatory step.
#[must_use]
pub fn tool() -> ToolBuilder {
    ToolBuilder {
        schema: serde_json::json!({"type": "object", "properties": {}}),
        description: None,
        _args: PhantomData,
    }
}

/// Staged tool builder.
///
/// `Args` is the input type the implementation will receive (defaults to
/// [`NoArgs`] until `input` is called); `DESCRIBED` tracks whether
/// `describe` has been used. See [`tool()`].
pub struct ToolBuilder<Args = NoArgs, const DESCRIBED: bool = false> {
    schema: JsonValue,
    description: Option<String>,
    _args: PhantomData<fn() -> Args>,
}

impl<const DESCRIBED: bool> ToolBuilder<NoArgs, DESCRIBED> {
    /// Set the input type for the tool.
    ///
    /// The schema shown to the model is derived from `A`, and the
    /// implementation passed to `run` receives a parsed `A`. The derived
    /// schema must describe an object; registering a tool whose input
    /// derives to a non-object schema fails fast at registration.
    #[must_use]
    pub fn input<A>(self) -> ToolBuilder<A, DESCRIBED>
    where
        A: DeserializeOwned + JsonSchema,
    {
        ToolBuilder {
            schema: schema::object_schema::<A>(),
            description: self.description,
            _args: PhantomData,
        }
    }
}

impl<Args> ToolBuilder<Args, false> {
    /// Set the tool's description.
    ///
    /// Shown to the model alongside the name and parameters; explain what
    /// the tool does and what it returns.
    #[must_use]
    pub fn describe(self, description: impl Into<String>) -> ToolBuilder<Args, true> {
        ToolBuilder {
            schema: self.schema,
            description: Some(description.into()),
            _args: PhantomData,
        }
    }
}

impl<Args, const DESCRIBED: bool> ToolBuilder<Args, DESCRIBED>
where
    Args: DeserializeOwned + Send + 'static,
{
    /// Set the implementation and finish the tool.
    ///
    /// The function receives the parsed input and resolves to a
    /// serializable result; failures become that call's error outcome at
    /// dispatch time.
    #[must_use]
    pub fn run<F, Fut, R>(self, func: F) -> Tool
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ToolError>> + Send + 'static,
        R: Serialize,
    {
        let handler = move |value: JsonValue| -> PinnedFuture<Result<JsonValue, ToolError>> {
            match serde_json::from_value::<Args>(value) {
                Ok(args) => {
                    let fut = func(args);
                    Box::pin(async move {
                        let result = fut.await?;
                        serde_json::to_value(result).map_err(ToolError::from)
                    })
                }
                Err(err) => {
                    let err = ToolError::invalid_arguments(&err);
                    Box::pin(async move { Err(err) })
                }
            }
        };

        Tool {
            schema: self.schema,
            description: self.description,
            handler: Arc::new(handler),
        }
    }

    /// Set a synchronous implementation and finish the tool.
    ///
    /// Like `run`, for implementations that never await.
    #[must_use]
    pub fn run_sync<F, R>(self, func: F) -> Tool
    where
        F: Fn(Args) -> Result<R, ToolError> + Send + Sync + 'static,
        R: Serialize,
    {
        let handler = move |value: JsonValue| -> PinnedFuture<Result<JsonValue, ToolError>> {
            let result = serde_json::from_value::<Args>(value)
                .map_err(|err| ToolError::invalid_arguments(&err))
                .and_then(&func)
                .and_then(|value| serde_json::to_value(value).map_err(ToolError::from));
            Box::pin(async move { result })
        };

        Tool {
            schema: self.schema,
            description: self.description,
            handler: Arc::new(handler),
        }
    }
}

impl<Args, const DESCRIBED: bool> std::fmt::Debug for ToolBuilder<Args, DESCRIBED> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolBuilder")
            .field("schema", &self.schema)
            .field("description", &self.description)
            .finish()
    }
}
