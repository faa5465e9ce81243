//! End-to-end editor flow
//!
//! Drives the store the way the CLI does: create a schema, edit its
//! property set, project it for display, export it, and import it back.

use schema_studio::{schema_to_fields, PropertyOptions, SchemaKind, SchemaStore};
use tempfile::tempdir;

#[test]
fn test_author_project_export_import() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("schemas.json");

    let mut store = SchemaStore::open(&store_path).unwrap();
    let id = store.create("Order").id.clone();

    // Build up: order number, customer block, line items
    let edited = store
        .get(&id)
        .unwrap()
        .schema
        .add_property("number", SchemaKind::String, &PropertyOptions::required())
        .add_property("customer", SchemaKind::Object, &PropertyOptions::default())
        .add_property("lines", SchemaKind::Array, &PropertyOptions::default());
    store.replace(&id, edited).unwrap();

    // Nest a property into the customer block through the same write path
    let entry = store.get(&id).unwrap();
    let customer = entry.schema.properties.as_ref().unwrap()["customer"]
        .add_property("name", SchemaKind::String, &PropertyOptions::required());
    let mut schema = entry.schema.clone();
    schema
        .properties
        .as_mut()
        .unwrap()
        .insert("customer".to_string(), customer);
    store.replace(&id, schema).unwrap();
    store.save().unwrap();

    // Projection reflects insertion order and nested paths
    let reloaded = SchemaStore::open(&store_path).unwrap();
    let entry = reloaded.get(&id).unwrap();
    assert!(entry.verify_checksum());

    let fields = schema_to_fields(&entry.schema, "");
    let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["number", "customer", "lines"]);

    let customer_children = fields[1].children.as_ref().unwrap();
    assert_eq!(customer_children[0].path, "customer.name");

    // Array of string items has no object fields to surface
    assert_eq!(fields[2].children.as_deref(), Some(&[][..]));

    // Export strips store identity; import brings the document back intact
    let text = reloaded.export_json(&id).unwrap();
    assert!(!text.contains(&id));

    let mut store = SchemaStore::open(&store_path).unwrap();
    let imported_id = store.import_json(&text).unwrap().id.clone();
    let imported = store.get(&imported_id).unwrap();
    assert_eq!(imported.schema, store.get(&id).unwrap().schema);
    assert_eq!(imported.title(), "Order");
}

#[test]
fn test_remove_restores_required_consistency() {
    let dir = tempdir().unwrap();
    let mut store = SchemaStore::open(dir.path().join("schemas.json")).unwrap();
    let id = store.create("Person").id.clone();

    let edited = store
        .get(&id)
        .unwrap()
        .schema
        .add_property("name", SchemaKind::String, &PropertyOptions::required())
        .add_property("email", SchemaKind::String, &PropertyOptions::required())
        .remove_property("name");
    store.replace(&id, edited).unwrap();

    let schema = &store.get(&id).unwrap().schema;
    assert!(!schema.properties.as_ref().unwrap().contains_key("name"));
    assert_eq!(schema.required.as_deref(), Some(&["email".to_string()][..]));
}
