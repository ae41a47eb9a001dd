//! # fluent-ai-tools
//!
//! Fluent tool declaration and tool-call dispatch for LLM function calling.
//!
//! This crate covers the local half of the model's function-calling loop:
//! declare tools with a typed builder, derive the manifest the model API
//! expects, and answer the batches of tool calls the model produces.
//!
//! ## Core Concepts
//!
//! - **[`tool()`]**: staged builder producing a [`Tool`], with each step
//!   usable at most once (enforced at compile time)
//! - **[`ToolRegistry`]**: named collection of tools, manifest derivation,
//!   and the dispatch pipeline
//! - **[`ManifestEntry`]** / **[`OpaqueTool`]**: what the model API is told
//!   about each tool
//! - **[`ToolCall`]** → **[`ChatToolMessage`]** / **[`AssistantToolOutput`]**:
//!   the request and the two response conventions on the wire
//!
//! ## Declaring and dispatching tools
//!
//! ```ignore
//! use fluent_ai_tools::{tool, ToolRegistry};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct WeatherQuery {
//!     city: String,
//! }
//!
//! let registry = ToolRegistry::new().tool(
//!     "get_weather",
//!     tool()
//!         .input::<WeatherQuery>()
//!         .describe("Gets the weather")
//!         .run(|query| async move {
//!             Ok(serde_json::json!({ "city": query.city, "weather": "sunny" }))
//!         }),
//! );
//!
//! // Advertise the tools:
//! let manifest = registry.manifest();
//!
//! // Later, answer the calls the model made:
//! // let messages = registry.process_chat_calls(message.tool_calls.as_deref()).await;
//! ```
//!
//! Every call in a batch runs independently: an unknown tool name, an
//! argument string that fails validation, or a failing implementation
//! produces an `{"error": ...}` outcome for that call and leaves the rest
//! of the batch untouched.
//!
//! Combining several registries (and vendor-native tools) into one manifest
//! lives in the companion `fluent-ai-toolsets` crate.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod calls;
pub mod errors;
pub mod manifest;
pub mod registry;
pub mod schema;
pub mod tool;

// Re-export core types
pub use builder::{tool, NoArgs, ToolBuilder};
pub use calls::{AssistantToolOutput, CallOutcome, ChatToolMessage, ToolCall, ToolCallFunction};
pub use errors::ToolError;
pub use manifest::{FunctionEntry, FunctionManifest, ManifestEntry, OpaqueTool};
pub use registry::ToolRegistry;
pub use tool::Tool;
