//! Recursive descriptor-to-JSON-Schema compiler.
//!
//! The crate walks a [`Descriptor`](shapeschema_core::Descriptor) graph and
//! produces one JSON Schema object per call:
//!
//! * [`generator`] – the recursion and the [`SchemaGenerator`] strategy table
//! * [`strategy`]  – default per-kind encodings
//! * [`context`]   – [`SchemaBuildingContext`] and its structural writers
//! * [`resolver`]  – annotation-driven keyword writers
//! * [`registry`]  – [`RefRegistry`], the `$ref` / `$defs` bookkeeping
//!
//! Enable the `tracing` feature to get `trace!` events per encoded
//! descriptor and `debug!` events for every reference registration.

pub mod context;
pub mod generator;
pub mod registry;
pub mod resolver;
pub mod strategy;

pub use context::{DEFAULT_DISCRIMINATOR, SchemaBuildingContext};
pub use generator::{EncodingStrategy, SchemaGenerator};
pub use registry::RefRegistry;

/// One JSON Schema fragment. Key order carries no meaning.
pub type Schema = serde_json::Map<String, serde_json::Value>;
