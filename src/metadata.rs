//! Explicit metadata registry keyed by annotation target.
//!
//! The host framework owns a [`MetadataStore`] and passes it to the
//! annotation operations. All annotation state lives here; nothing is
//! stored in globals, so two applications (or two tests) never share
//! metadata unless they share a store.

use std::collections::HashMap;

use serde_json::Value;

use crate::param::ParameterRecord;

/// Well-known key under which metadata is stored on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataKey(pub &'static str);

impl MetadataKey {
    /// Ordered list of parameter records attached to a handler.
    pub const API_PARAMETERS: MetadataKey = MetadataKey("api:parameters");

    /// Marker written when a handler is registered as a route operation.
    pub const OPERATION: MetadataKey = MetadataKey("api:operation");
}

/// Identity of an annotation target: a controller, or one of its handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Controller { name: String },
    Handler { controller: String, name: String },
}

impl Target {
    pub fn controller(name: impl Into<String>) -> Self {
        Target::Controller { name: name.into() }
    }

    pub fn handler(controller: impl Into<String>, name: impl Into<String>) -> Self {
        Target::Handler {
            controller: controller.into(),
            name: name.into(),
        }
    }
}

/// Registry mapping `(target, key)` to a JSON metadata value.
///
/// Values written here are read back by document generation after all
/// annotations have run. A value attached once is never mutated; lists
/// only grow at the end via [`MetadataStore::append`].
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<Target, HashMap<MetadataKey, Value>>,
}

impl MetadataStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the metadata stored under `key` on `target`, if any.
    pub fn get(&self, key: MetadataKey, target: &Target) -> Option<&Value> {
        self.entries.get(target)?.get(&key)
    }

    /// Returns whether any metadata is stored under `key` on `target`.
    pub fn has(&self, key: MetadataKey, target: &Target) -> bool {
        self.get(key, target).is_some()
    }

    /// Stores `value` under `key` on `target`, replacing any previous value.
    pub fn set(&mut self, key: MetadataKey, target: &Target, value: Value) {
        tracing::trace!(?target, key = key.0, "metadata set");
        self.entries
            .entry(target.clone())
            .or_default()
            .insert(key, value);
    }

    /// Appends `value` to the list stored under `key` on `target`,
    /// creating the list when absent. Existing entries are never
    /// deduplicated or reordered.
    pub fn append(&mut self, key: MetadataKey, target: &Target, value: Value) {
        tracing::trace!(?target, key = key.0, "metadata append");
        let slot = self
            .entries
            .entry(target.clone())
            .or_default()
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));

        match slot {
            Value::Array(items) => items.push(value),
            other => *other = Value::Array(vec![other.take(), value]),
        }
    }

    /// Typed reader for the parameter list attached to a handler target.
    ///
    /// Returns an empty list when the target carries no parameter metadata.
    pub fn parameters(&self, target: &Target) -> Vec<ParameterRecord> {
        match self.get(MetadataKey::API_PARAMETERS, target) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns whether `target` has been marked as a registered route
    /// operation.
    pub fn is_operation_handler(&self, target: &Target) -> bool {
        self.has(MetadataKey::OPERATION, target)
    }
}
