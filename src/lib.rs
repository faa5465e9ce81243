//! Schema Studio
//!
//! A toolkit for authoring, persisting, and exchanging JSON Schema documents.
//!
//! ## Features
//!
//! - **Typed Document Model**: a recursive, structurally permissive `Schema`
//!   node covering the draft-07 keyword vocabulary, round-trip safe for
//!   keywords it does not know about
//! - **Field Projection**: pure flattening of an object schema into an
//!   ordered, path-annotated field tree for rendering and navigation
//! - **Copy-on-Write Edits**: add/remove property operations that keep
//!   `properties` and `required` consistent without touching their input
//! - **File-Backed Store**: a schema list with checksummed persistence,
//!   duplication, and JSON Schema import/export
//!
//! ## Data flow
//!
//! ```text
//! SchemaStore (host)
//!   ├── holds Schema documents
//!   ├── schema_to_fields(schema)      -> Field tree for display
//!   ├── schema.add_property(...)      -> new Schema
//!   ├── schema.remove_property(...)   -> new Schema
//!   └── replace(id, new_schema)       -> persisted
//! ```

pub mod checksum;
pub mod config;
pub mod edit;
pub mod error;
pub mod fields;
pub mod schema;
pub mod store;

pub use checksum::Checksum;
pub use config::StudioConfig;
pub use edit::PropertyOptions;
pub use error::{Result, StudioError};
pub use fields::{schema_to_fields, Field};
pub use schema::{AdditionalProperties, Schema, SchemaKind, TypeSet, DEFAULT_DRAFT};
pub use store::{SchemaStore, StoredSchema};
