//! Field projection
//!
//! Flattens an object schema into an ordered tree of display fields for
//! rendering and navigation. The projection is a pure read: fields borrow
//! their schema nodes from the source document, carry a dotted/bracketed
//! path from the root, and are cheap to discard and rebuild after any edit.

use crate::schema::{Schema, SchemaKind};

/// One property of a schema tree, as the editor displays it
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Property key (array elements surface through a `[]` path segment)
    pub name: &'a str,
    /// Address from the tree root, e.g. `address.city` or `items[].sku`
    pub path: String,
    /// The property's schema node, borrowed from the source document
    pub schema: &'a Schema,
    /// Nested fields, present only when this field's schema is an object
    /// with properties or an array of such objects
    pub children: Option<Vec<Field<'a>>>,
    /// UI toggle state, starts collapsed
    pub expanded: bool,
}

/// Project a schema into its ordered field tree.
///
/// Only object-typed schemas with a non-empty `properties` map produce
/// fields; anything else (scalars, arrays of scalars, objects without
/// properties, union-typed nodes) degrades to an empty sequence rather
/// than failing — the editor must keep rendering mid-edit and imported
/// documents. Fields come back in property insertion order, recursively.
///
/// `parent_path` prefixes every emitted path; pass `""` at the root.
pub fn schema_to_fields<'a>(schema: &'a Schema, parent_path: &str) -> Vec<Field<'a>> {
    let mut fields = Vec::new();

    let properties = match &schema.properties {
        Some(properties) if schema.is_kind(SchemaKind::Object) => properties,
        _ => return fields,
    };

    for (name, prop) in properties {
        let path = if parent_path.is_empty() {
            name.clone()
        } else {
            format!("{parent_path}.{name}")
        };

        let children = if prop.is_kind(SchemaKind::Object)
            && prop.properties.as_ref().is_some_and(|p| !p.is_empty())
        {
            Some(schema_to_fields(prop, &path))
        } else if prop.is_kind(SchemaKind::Array) {
            prop.items
                .as_deref()
                .map(|items| schema_to_fields(items, &format!("{path}[]")))
        } else {
            None
        };

        fields.push(Field {
            name,
            path,
            schema: prop,
            children,
            expanded: false,
        });
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::PropertyOptions;

    fn parse(text: &str) -> Schema {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_scalar_schema_projects_nothing() {
        assert!(schema_to_fields(&parse(r#"{"type": "string"}"#), "").is_empty());
        assert!(schema_to_fields(&parse(r#"{"type": "number", "minimum": 0}"#), "").is_empty());
    }

    #[test]
    fn test_object_without_properties_projects_nothing() {
        assert!(schema_to_fields(&parse(r#"{"type": "object"}"#), "").is_empty());
        assert!(schema_to_fields(&parse(r#"{"type": "object", "properties": {}}"#), "").is_empty());
    }

    #[test]
    fn test_array_of_scalars_projects_nothing() {
        let schema = parse(r#"{"type": "array", "items": {"type": "string"}}"#);
        assert!(schema_to_fields(&schema, "").is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let schema = Schema::empty_object("Ordered")
            .add_property("a", SchemaKind::String, &PropertyOptions::default())
            .add_property("b", SchemaKind::Number, &PropertyOptions::default())
            .add_property("c", SchemaKind::Boolean, &PropertyOptions::default());

        let names: Vec<&str> = schema_to_fields(&schema, "").iter().map(|f| f.name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_nested_object_paths() {
        let schema = parse(
            r#"{
                "type": "object",
                "properties": {
                    "addr": {
                        "type": "object",
                        "properties": {
                            "city": {"type": "string"}
                        }
                    }
                }
            }"#,
        );

        let fields = schema_to_fields(&schema, "");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "addr");
        assert_eq!(fields[0].path, "addr");

        let children = fields[0].children.as_ref().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "city");
        assert_eq!(children[0].path, "addr.city");
        assert!(children[0].children.is_none());
    }

    #[test]
    fn test_array_of_objects_bracket_paths() {
        let schema = parse(
            r#"{
                "type": "object",
                "properties": {
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "sku": {"type": "string"}
                            }
                        }
                    }
                }
            }"#,
        );

        let fields = schema_to_fields(&schema, "");
        assert_eq!(fields[0].path, "items");

        let children = fields[0].children.as_ref().unwrap();
        assert_eq!(children[0].name, "sku");
        assert_eq!(children[0].path, "items[].sku");
    }

    #[test]
    fn test_parent_path_prefix() {
        let schema = parse(r#"{"type": "object", "properties": {"x": {"type": "string"}}}"#);
        let fields = schema_to_fields(&schema, "outer.inner");
        assert_eq!(fields[0].path, "outer.inner.x");
    }

    #[test]
    fn test_tolerates_required_violations() {
        // required names a property that does not exist; projection must not care
        let schema = parse(
            r#"{
                "type": "object",
                "properties": {"present": {"type": "string"}},
                "required": ["present", "ghost"]
            }"#,
        );
        let fields = schema_to_fields(&schema, "");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "present");
    }

    #[test]
    fn test_deep_nesting() {
        let schema = parse(
            r#"{
                "type": "object",
                "properties": {
                    "a": {
                        "type": "object",
                        "properties": {
                            "b": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "c": {"type": "integer"}
                                    }
                                }
                            }
                        }
                    }
                }
            }"#,
        );

        let fields = schema_to_fields(&schema, "");
        let b = &fields[0].children.as_ref().unwrap()[0];
        assert_eq!(b.path, "a.b");
        let c = &b.children.as_ref().unwrap()[0];
        assert_eq!(c.path, "a.b[].c");
        assert_eq!(c.schema.display_type(), "number");
    }
}
