//! JSON Schema document model
//!
//! A `Schema` is one node of a (draft-07 style) JSON Schema document,
//! recursively nested through `properties`, `items`, `definitions` and the
//! combinator keywords. The model is structurally permissive: every keyword
//! is optional, mismatched keywords are carried rather than rejected, and
//! keywords this crate does not know about survive round trips through the
//! `extra` map. Semantic validation of instances against a schema is out of
//! scope here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Draft identifier stamped onto newly created schemas.
pub const DEFAULT_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Atomic JSON Schema type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl SchemaKind {
    /// The keyword as it appears in schema text
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Integer => "integer",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Null => "null",
        }
    }
}

/// The `type` keyword: either one kind or an ordered union of kinds
/// (typically a nullable union like `["string", "null"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    One(SchemaKind),
    Many(Vec<SchemaKind>),
}

impl TypeSet {
    /// The single kind, if `type` is not a union
    pub fn as_one(&self) -> Option<SchemaKind> {
        match self {
            TypeSet::One(kind) => Some(*kind),
            TypeSet::Many(_) => None,
        }
    }
}

impl From<SchemaKind> for TypeSet {
    fn from(kind: SchemaKind) -> Self {
        TypeSet::One(kind)
    }
}

/// The `additionalProperties` keyword: a blanket boolean or a schema that
/// extra properties must match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// One JSON Schema node
///
/// All mutating operations on schemas (see `edit`) return new values;
/// holders of a `Schema` never observe in-place modification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Draft identifier (`$schema`), treated as an opaque string
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,

    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeSet>,

    /// Child schemas by property name, insertion order preserved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Names of required properties; semantically a set, kept as a sequence.
    /// Invariant: every entry names a key of `properties` (maintained by the
    /// mutators, tolerated when violated by everything else).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Element shape for array schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<IndexMap<String, Schema>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    // String validations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // Number validations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    // Array validations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    // Object validations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,

    // Combinators, carried through but never interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    /// Reference to another schema location, never resolved here
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Keywords the model does not know about, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Schema {
    /// Create a bare schema of one kind
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind: Some(TypeSet::One(kind)),
            ..Default::default()
        }
    }

    /// Create an empty object schema for a new definition: object-typed,
    /// empty `properties`, empty `required`, default draft identifier.
    pub fn empty_object(title: impl Into<String>) -> Self {
        Self {
            draft: Some(DEFAULT_DRAFT.to_string()),
            title: Some(title.into()),
            kind: Some(TypeSet::One(SchemaKind::Object)),
            properties: Some(IndexMap::new()),
            required: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Whether `type` is exactly one given kind (unions do not match)
    pub fn is_kind(&self, kind: SchemaKind) -> bool {
        matches!(&self.kind, Some(set) if set.as_one() == Some(kind))
    }

    /// Simple type label for display
    ///
    /// Unions join their non-null members (`"string | number"`), `integer`
    /// displays as `number`, date formats display as `date`, absent `type`
    /// displays as `any`. Total: every schema maps to a non-empty label, so
    /// an all-null union displays as `null`.
    pub fn display_type(&self) -> String {
        if let Some(TypeSet::Many(kinds)) = &self.kind {
            let parts: Vec<&str> = kinds
                .iter()
                .filter(|k| **k != SchemaKind::Null)
                .map(|k| k.as_str())
                .collect();
            return if parts.is_empty() {
                SchemaKind::Null.as_str().to_string()
            } else {
                parts.join(" | ")
            };
        }
        if self.is_kind(SchemaKind::Integer) {
            return SchemaKind::Number.as_str().to_string();
        }
        if matches!(self.format.as_deref(), Some("date") | Some("date-time")) {
            return "date".to_string();
        }
        match &self.kind {
            Some(TypeSet::One(kind)) => kind.as_str().to_string(),
            _ => "any".to_string(),
        }
    }

    /// Number of direct properties
    pub fn property_count(&self) -> usize {
        self.properties.as_ref().map_or(0, |p| p.len())
    }
}
