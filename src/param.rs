//! Parameter options and the canonical parameter record.
//!
//! [`ParameterOptions`] is what callers declare; [`ParameterRecord`] is
//! the normalized form attached to the metadata store and later consumed
//! by document generation. Normalization applies the defaults (`name: ""`,
//! `required: true`) and folds a declared enum into the schema object.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, SchemaObject};

/// Where a parameter lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// Declarative options for one HTTP parameter.
///
/// Every field is optional; omitted fields fall back to the record
/// defaults during normalization.
///
/// # Examples
///
/// ```
/// use anota::param::ParameterOptions;
///
/// let options = ParameterOptions::new()
///     .name("status")
///     .description("filter by status")
///     .enumeration(["active", "archived"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterOptions {
    name: Option<String>,
    required: Option<bool>,
    description: Option<String>,
    deprecated: Option<bool>,
    example: Option<Value>,
    schema: Option<SchemaObject>,
    enumeration: Option<Vec<Value>>,
    enum_name: Option<String>,
    extensions: IndexMap<String, Value>,
}

impl ParameterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameter identifier. Defaults to `""` when omitted.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the parameter is required. Defaults to `true` when omitted.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// An explicit schema object. A declared enum is merged into it.
    pub fn schema(mut self, schema: impl Into<SchemaObject>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// The set of allowed values. Must be non-empty and primitive.
    pub fn enumeration<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enumeration = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Label consumed by named-enum registration downstream. Only carried
    /// onto the record when an enumeration is declared.
    pub fn enum_name(mut self, enum_name: impl Into<String>) -> Self {
        self.enum_name = Some(enum_name.into());
        self
    }

    /// An arbitrary passthrough field copied verbatim onto the record.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

/// Canonical metadata describing one HTTP parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl ParameterRecord {
    /// Normalizes declarative options into a record for `location`.
    ///
    /// A declared enumeration is resolved and folded into the schema
    /// object, creating one when the options carried none; explicit
    /// schema fields survive the merge.
    pub(crate) fn from_options(
        location: ParameterLocation,
        options: ParameterOptions,
    ) -> Result<Self> {
        let ParameterOptions {
            name,
            required,
            description,
            deprecated,
            example,
            schema,
            enumeration,
            enum_name,
            extensions,
        } = options;

        let mut record = ParameterRecord {
            name: name.unwrap_or_default(),
            location,
            required: required.unwrap_or(true),
            description,
            deprecated,
            example,
            schema,
            enum_name: None,
            extensions,
        };

        if let Some(values) = enumeration {
            let values = schema::resolve_enum(&record.name, &values)?;
            let schema = record.schema.get_or_insert_with(SchemaObject::new);
            schema.schema_type = Some(schema::enum_schema_type(&values).to_string());
            schema.enum_values = Some(values);
            record.enum_name = enum_name;
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn path_record(options: ParameterOptions) -> ParameterRecord {
        ParameterRecord::from_options(ParameterLocation::Path, options).unwrap()
    }

    #[test]
    fn test_defaults_with_empty_options() {
        let record = path_record(ParameterOptions::new());
        assert_eq!(record.name, "");
        assert!(record.required);
        assert!(record.schema.is_none());
    }

    #[test]
    fn test_name_and_required_carried_over() {
        let record = path_record(ParameterOptions::new().name("id").required(false));
        assert_eq!(record.name, "id");
        assert!(!record.required);
    }

    #[test]
    fn test_serialized_shape_minimal() {
        let record = path_record(ParameterOptions::new().name("id"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "id", "in": "path", "required": true})
        );
    }

    #[test]
    fn test_location_serializes_lowercase() {
        let record =
            ParameterRecord::from_options(ParameterLocation::Query, ParameterOptions::new())
                .unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap()["in"], "query");
    }

    #[test]
    fn test_numeric_enum_folds_into_schema() {
        let record = path_record(ParameterOptions::new().name("level").enumeration([1, 2, 3]));
        assert_eq!(
            serde_json::to_value(record.schema.unwrap()).unwrap(),
            json!({"type": "number", "enum": [1, 2, 3]})
        );
    }

    #[test]
    fn test_string_enum_folds_into_schema() {
        let record = path_record(
            ParameterOptions::new()
                .name("status")
                .enumeration(["A", "B"]),
        );
        assert_eq!(
            serde_json::to_value(record.schema.unwrap()).unwrap(),
            json!({"type": "string", "enum": ["A", "B"]})
        );
    }

    #[test]
    fn test_enum_merges_into_explicit_schema() {
        let record = path_record(
            ParameterOptions::new()
                .name("status")
                .schema(SchemaObject::new().extension("format", "status-code"))
                .enumeration(["A", "B"]),
        );
        assert_eq!(
            serde_json::to_value(record.schema.unwrap()).unwrap(),
            json!({"type": "string", "enum": ["A", "B"], "format": "status-code"})
        );
    }

    #[test]
    fn test_enum_name_requires_enumeration() {
        let with_enum = path_record(
            ParameterOptions::new()
                .name("status")
                .enumeration(["A"])
                .enum_name("Status"),
        );
        assert_eq!(with_enum.enum_name.as_deref(), Some("Status"));

        let without_enum = path_record(ParameterOptions::new().name("status").enum_name("Status"));
        assert!(without_enum.enum_name.is_none());
    }

    #[test]
    fn test_enum_name_serializes_camel_case() {
        let record = path_record(
            ParameterOptions::new()
                .name("status")
                .enumeration(["A"])
                .enum_name("Status"),
        );
        assert_eq!(serde_json::to_value(&record).unwrap()["enumName"], "Status");
    }

    #[test]
    fn test_empty_enum_is_an_error() {
        let result = ParameterRecord::from_options(
            ParameterLocation::Path,
            ParameterOptions::new()
                .name("status")
                .enumeration(Vec::<Value>::new()),
        );
        assert_eq!(result.unwrap_err().parameter, "status");
    }

    #[test]
    fn test_passthrough_fields_survive() {
        let record = path_record(
            ParameterOptions::new()
                .name("id")
                .description("user id")
                .deprecated(true)
                .example(json!("abc-123"))
                .extension("style", "simple"),
        );
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "id",
                "in": "path",
                "required": true,
                "description": "user id",
                "deprecated": true,
                "example": "abc-123",
                "style": "simple"
            })
        );
    }

    #[test]
    fn test_record_roundtrip() {
        let record = path_record(
            ParameterOptions::new()
                .name("status")
                .enumeration(["A", "B"])
                .enum_name("Status"),
        );
        let value = serde_json::to_value(&record).unwrap();
        let back: ParameterRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
