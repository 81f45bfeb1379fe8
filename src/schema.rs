//! OpenAPI schema fragments and enum value handling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// An OpenAPI schema object fragment, as attached to a parameter record.
///
/// Only the fields this crate manipulates are typed; everything else is
/// carried through untouched, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl SchemaObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema's primitive type.
    pub fn typed(mut self, schema_type: impl Into<String>) -> Self {
        self.schema_type = Some(schema_type.into());
        self
    }

    /// Sets an arbitrary passthrough field (e.g. `format`, `pattern`).
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

/// Converts a derived `schemars` schema into a schema fragment.
///
/// Keeps `type` only when it is a single string; anything else (unions,
/// nested metadata) passes through as-is.
impl From<schemars::Schema> for SchemaObject {
    fn from(schema: schemars::Schema) -> Self {
        let mut out = SchemaObject::default();
        let Value::Object(map) = serde_json::to_value(&schema).unwrap_or_default() else {
            return out;
        };

        for (key, value) in map {
            if key == "type" {
                match value {
                    Value::String(schema_type) => out.schema_type = Some(schema_type),
                    other => {
                        out.extensions.insert(key, other);
                    }
                }
            } else if key == "enum" {
                match value {
                    Value::Array(values) => out.enum_values = Some(values),
                    other => {
                        out.extensions.insert(key, other);
                    }
                }
            } else {
                out.extensions.insert(key, value);
            }
        }

        out
    }
}

/// Resolves the concrete allowed-value set for an enum declaration.
///
/// The set must be non-empty and contain only primitive values; anything
/// else is a caller contract violation.
pub(crate) fn resolve_enum(parameter: &str, values: &[Value]) -> Result<Vec<Value>> {
    if values.is_empty() {
        return Err(Error::empty_enum(parameter));
    }

    for value in values {
        if value.is_null() || value.is_array() || value.is_object() {
            return Err(Error::non_primitive_enum(parameter, value));
        }
    }

    Ok(values.to_vec())
}

/// Schema primitive type for an enum value set.
///
/// All-numeric sets map to `number`; everything else to `string`.
pub(crate) fn enum_schema_type(values: &[Value]) -> &'static str {
    if values.iter().all(Value::is_number) {
        "number"
    } else {
        "string"
    }
}
