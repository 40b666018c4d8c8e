//! Unified error type exposed by **`shapeschema-core`**.
//!
//! Every failure is terminal for the `schema_of` call that produced it. The
//! generator is pure and deterministic, so retrying with the same descriptor
//! graph reproduces the same error.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A map whose key does not serialize as a JSON string cannot be expressed
    /// through `additionalProperties`.
    #[error("unsupported key type `{key}` for map `{map}`: map keys must be strings")]
    UnsupportedMapKey { map: String, key: String },

    /// The descriptor's kind has no JSON Schema counterpart in this position.
    #[error("unsupported kind `{kind}` for descriptor `{serial_name}`")]
    UnsupportedKind { serial_name: String, kind: String },

    /// Contextual descriptors have no fixed shape; a custom
    /// `encode_contextual` strategy has to be supplied.
    #[error("contextual descriptor `{serial_name}` requires a custom encoding strategy")]
    ContextualUnsupported { serial_name: String },

    /// A polymorphic descriptor without any concrete variant to enumerate.
    #[error("polymorphic descriptor `{serial_name}` has no concrete variants")]
    NoVariants { serial_name: String },

    /// A reference was requested for a key that was never registered and no
    /// builder was supplied to materialize it.
    #[error("no builder supplied for unregistered reference `{key}`")]
    MissingRefBuilder { key: String },

    /// The descriptor violates the element conventions of its kind.
    #[error("malformed descriptor `{serial_name}`: {reason}")]
    MalformedDescriptor { serial_name: String, reason: String },

    /// JSON cannot carry NaN or infinite numbers.
    #[error("`{keyword}` must be a finite number, got {value}")]
    NonFiniteBound { keyword: &'static str, value: f64 },
}

impl SchemaError {
    pub fn malformed(serial_name: &str, reason: impl Into<String>) -> Self {
        SchemaError::MalformedDescriptor {
            serial_name: serial_name.to_string(),
            reason: reason.into(),
        }
    }
}
