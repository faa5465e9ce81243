//! Schema mutation
//!
//! Copy-on-write edits to a schema's property set. Both operations return a
//! new `Schema` value and keep `properties` and `required` consistent with
//! each other; the input is never modified and shares no mutable state with
//! the result.

use indexmap::IndexMap;

use crate::schema::{Schema, SchemaKind};

/// Options for a newly added property
#[derive(Debug, Clone, Default)]
pub struct PropertyOptions {
    /// Attached as the property's `description` keyword
    pub description: Option<String>,
    /// Append the property name to the parent's `required` list
    pub required: bool,
}

impl PropertyOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Schema {
    /// Return a copy of this schema with one property added.
    ///
    /// The new property is a bare schema of `kind`; object properties start
    /// with an empty `properties` map, array properties default to
    /// string-typed `items`. An existing property of the same name is
    /// overwritten in place (last write wins, original position kept).
    /// Names already in `required` are not appended twice.
    pub fn add_property(&self, name: &str, kind: SchemaKind, options: &PropertyOptions) -> Schema {
        let mut next = self.clone();

        let mut prop = Schema::of_kind(kind);
        if let Some(description) = &options.description {
            prop.description = Some(description.clone());
        }
        match kind {
            SchemaKind::Object => {
                prop.properties = Some(IndexMap::new());
            }
            SchemaKind::Array => {
                prop.items = Some(Box::new(Schema::of_kind(SchemaKind::String)));
            }
            _ => {}
        }

        next.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), prop);

        if options.required {
            let required = next.required.get_or_insert_with(Vec::new);
            if !required.iter().any(|entry| entry == name) {
                required.push(name.to_string());
            }
        }

        next
    }

    /// Return a copy of this schema with one property removed.
    ///
    /// Deletes `name` from `properties` (a no-op if absent, not an error)
    /// and filters it out of `required`, preserving the order of the
    /// remaining entries.
    pub fn remove_property(&self, name: &str) -> Schema {
        let mut next = self.clone();

        if let Some(properties) = next.properties.as_mut() {
            properties.shift_remove(name);
        }
        if let Some(required) = next.required.as_mut() {
            required.retain(|entry| entry != name);
        }

        next
    }
}
