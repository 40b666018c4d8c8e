//! # `shapeschema` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                       | What it provides                                                        |
//! |-----------------------------|-------------------------------------------------------------------------|
//! | **`shapeschema-core`**      | Descriptors, annotations, the `Describe` trait, kind classification     |
//! | **`shapeschema-generator`** | The recursive generator, per-kind strategies, `$ref` registry           |
//!
//! ## Quick example
//!
//! ```rust
//! use shapeschema::{Annotation, Describe, Descriptor, Element, schema_of};
//!
//! struct Account {
//!     name: String,
//!     owner: String,
//! }
//!
//! impl Describe for Account {
//!     fn descriptor() -> Descriptor {
//!         Descriptor::class("Account")
//!             .with(Element::of::<String>("name").annotate(Annotation::MinLength(1)))
//!             // has a default, so it is not required
//!             .with(Element::of::<String>("owner").optional())
//!             .build()
//!     }
//! }
//!
//! let schema = schema_of::<Account>().unwrap();
//! assert_eq!(
//!     schema,
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {
//!             "name": { "type": "string", "minLength": 1 },
//!             "owner": { "type": "string" }
//!         },
//!         "required": ["name"]
//!     })
//! );
//! ```
//!
//! ## Recursive types
//!
//! Annotate a type with [`Annotation::RefWithSerialName`] (or
//! [`Annotation::Ref`]) to have it emitted once under `$defs` and pointed at
//! with `$ref` everywhere it is used. This is also the only way to describe
//! self-referential types: a cycle without a reference-annotated node never
//! terminates.
#![doc(html_root_url = "https://docs.rs/shapeschema/latest")]

use serde_json::Value;

pub use shapeschema_core::*;
pub use shapeschema_generator as generator;
pub use shapeschema_generator::{
    RefRegistry, Schema, SchemaBuildingContext, SchemaGenerator, resolver, strategy,
};

/// Schema of `T` produced by the default [`SchemaGenerator`].
pub fn schema_of<T: Describe + ?Sized>() -> Result<Value> {
    SchemaGenerator::default().schema_for::<T>().map(Value::Object)
}

/// Schema of `descriptor` produced by the default [`SchemaGenerator`].
pub fn schema_of_descriptor(descriptor: &Descriptor) -> Result<Value> {
    SchemaGenerator::default()
        .schema_of(descriptor, &[])
        .map(Value::Object)
}
