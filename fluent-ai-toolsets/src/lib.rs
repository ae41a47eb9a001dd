//! # fluent-ai-toolsets
//!
//! Combine tool registries and vendor-native tools into one dispatchable
//! toolset.
//!
//! A [`Toolset`] is anything registry-shaped: it advertises manifest
//! entries, recognizes tool names, and answers call batches.
//! [`fluent_ai_tools::ToolRegistry`] is the base implementation;
//! [`CombinedToolset`] merges any number of toolsets (plus opaque tools
//! like the hosted code interpreter) into a single aggregate that is
//! itself a toolset, so combinations nest.
//!
//! ```ignore
//! use fluent_ai_toolsets::{combine_tools, Toolset};
//! use fluent_ai_tools::OpaqueTool;
//!
//! let combined = combine_tools([
//!     weather_registry.into(),
//!     math_registry.into(),
//!     OpaqueTool::code_interpreter().into(),
//! ]);
//!
//! let manifest = combined.manifest();
//! // let outputs = combined.process_assistant_calls(Some(&calls)).await;
//! ```
//!
//! Each call is handled by exactly one source (the first one that
//! recognizes the name), and calls no source recognizes resolve to an
//! unknown-tool error outcome without disturbing the rest of the batch.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod combined;
pub mod toolset;

// Re-export core types
pub use combined::{combine_tools, CombinedToolset, ToolSource};
pub use toolset::{BoxedToolset, Toolset};
