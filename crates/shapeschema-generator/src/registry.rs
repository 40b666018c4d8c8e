//! Named `$ref` targets collected during one schema-generation call.
//!
//! The registry is what makes cyclic descriptor graphs terminate. The first
//! time a key is requested a placeholder is stored *before* its fragment is
//! built, so a re-entrant request for the same key (the self-edge of a
//! recursive type) gets a pointer back instead of recursing again. Once the
//! fragment is complete it overwrites the placeholder.
//!
//! A registry belongs to exactly one top-level call. It is never shared
//! between calls and never cached; [`crate::SchemaGenerator::schema_of`]
//! creates a fresh one every time.

use std::collections::BTreeMap;

use serde_json::Value;
use shapeschema_core::{JsonType, Result, SchemaError};

use crate::Schema;

/// Side-table keyword the definitions are merged under.
pub const DEFS: &str = "$defs";
pub const REF: &str = "$ref";
pub const ANY_OF: &str = "anyOf";
/// JSON pointer prefix of every registered fragment.
pub const REF_PREFIX: &str = "#/$defs/";

#[derive(Debug, Default)]
pub struct RefRegistry {
    entries: BTreeMap<String, Entry>,
}

#[derive(Debug)]
enum Entry {
    /// Registered but still being built.
    Pending,
    Ready(Schema),
}

impl RefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a pointer to `key`, building and registering its fragment on
    /// first encounter.
    ///
    /// `build` receives the registry itself so the fragment may register
    /// further keys, or come back to `key` and receive a pointer.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::MissingRefBuilder`] – `key` is unknown and `build` is
    ///   `None`.
    /// * Anything `build` returns.
    pub fn register_or_get<F>(&mut self, key: &str, nullable: bool, build: Option<F>) -> Result<Schema>
    where
        F: FnOnce(&mut Self) -> Result<Schema>,
    {
        if self.entries.contains_key(key) {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, "reusing registered reference");
        } else {
            let build = build.ok_or_else(|| SchemaError::MissingRefBuilder {
                key: key.to_string(),
            })?;
            #[cfg(feature = "tracing")]
            tracing::debug!(key, "registering reference");
            self.entries.insert(key.to_string(), Entry::Pending);
            let schema = build(self)?;
            self.entries.insert(key.to_string(), Entry::Ready(schema));
        }
        Ok(reference(key, nullable))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// `true` while the fragment for `key` is under construction.
    pub fn is_pending(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Entry::Pending))
    }

    /// Completed fragment registered under `key`.
    pub fn get(&self, key: &str) -> Option<&Schema> {
        match self.entries.get(key) {
            Some(Entry::Ready(schema)) => Some(schema),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All completed fragments, keyed by reference name.
    pub fn into_definitions(self) -> Schema {
        self.entries
            .into_iter()
            .filter_map(|(key, entry)| match entry {
                Entry::Ready(schema) => Some((key, Value::Object(schema))),
                Entry::Pending => None,
            })
            .collect()
    }

    /// Merge the definitions into `root` under [`DEFS`]; no-op when empty.
    pub fn attach_to(self, root: &mut Schema) {
        if self.is_empty() {
            return;
        }
        root.insert(DEFS.to_string(), Value::Object(self.into_definitions()));
    }
}

/// `{"$ref": ptr}`, or `{"anyOf": [{"type": "null"}, {"$ref": ptr}]}` when
/// nullable so the shared fragment itself never absorbs `null`.
pub fn reference(key: &str, nullable: bool) -> Schema {
    let mut pointer = Schema::new();
    pointer.insert(REF.to_string(), Value::from(format!("{REF_PREFIX}{key}")));
    if !nullable {
        return pointer;
    }

    let mut null = Schema::new();
    null.insert("type".to_string(), Value::from(JsonType::Null.as_str()));

    let mut schema = Schema::new();
    schema.insert(
        ANY_OF.to_string(),
        Value::Array(vec![Value::Object(null), Value::Object(pointer)]),
    );
    schema
}
