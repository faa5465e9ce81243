//! Schema store
//!
//! The editor host: owns the list of authored schemas, persists it as a
//! single JSON file, and funnels every edit through an atomic replace of
//! one entry. The store holds no schema-tree logic of its own; it hands
//! documents to the projector and mutators and keeps whatever comes back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::checksum::Checksum;
use crate::error::{Result, StudioError};
use crate::schema::Schema;

/// Title given to imported documents that carry none
pub const IMPORTED_TITLE: &str = "ImportedSchema";

/// A schema document plus the store's bookkeeping around it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSchema {
    /// Store-local identity, never part of the exported document
    pub id: String,
    /// The document itself
    pub schema: Schema,
    /// Checksum of the document at last write
    pub checksum: Checksum,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredSchema {
    fn new(schema: Schema) -> Self {
        let checksum = Checksum::from_schema(&schema);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            schema,
            checksum,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display title
    pub fn title(&self) -> &str {
        self.schema.title.as_deref().unwrap_or("Untitled")
    }

    /// Whether the stored document still matches its recorded checksum
    pub fn verify_checksum(&self) -> bool {
        self.checksum.verify(&self.schema)
    }

    /// Default file name for exports, e.g. `order.schema.json`
    pub fn export_file_name(&self) -> String {
        format!("{}.schema.json", self.title().to_lowercase())
    }
}

/// On-disk shape of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    schemas: Vec<StoredSchema>,
}

/// File-backed list of schemas
#[derive(Debug)]
pub struct SchemaStore {
    path: PathBuf,
    entries: Vec<StoredSchema>,
}

impl SchemaStore {
    /// Open a store file, or start an empty store if the file does not exist.
    ///
    /// Entries whose checksum no longer matches their document are kept but
    /// logged; a hand-edited store file must not lock the editor out.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&content)?;
            file.schemas
        } else {
            Vec::new()
        };

        for entry in &entries {
            if !entry.verify_checksum() {
                warn!(id = %entry.id, title = %entry.title(), "stored schema fails checksum verification");
            }
        }

        Ok(Self { path, entries })
    }

    /// Write the store back to its file, pretty-printed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = StoreFile {
            schemas: self.entries.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[StoredSchema] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StoredSchema> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut StoredSchema> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StudioError::NotFound(id.to_string()))
    }

    /// Create a new empty object schema and add it to the list
    pub fn create(&mut self, title: impl Into<String>) -> &StoredSchema {
        self.insert(Schema::empty_object(title))
    }

    /// Add an already-built document to the list
    pub fn insert(&mut self, schema: Schema) -> &StoredSchema {
        self.entries.push(StoredSchema::new(schema));
        self.entries.last().expect("entry was just pushed")
    }

    /// Replace the document stored under `id` with an edited copy.
    ///
    /// This is the single write path for edits: read the entry, apply a
    /// mutator, hand the result back here. Checksum and timestamp follow.
    pub fn replace(&mut self, id: &str, schema: Schema) -> Result<&StoredSchema> {
        let entry = self.get_mut(id)?;
        entry.checksum = Checksum::from_schema(&schema);
        entry.schema = schema;
        entry.updated_at = Utc::now();
        Ok(entry)
    }

    /// Copy an existing schema under a new id, `_copy`-suffixed title
    pub fn duplicate(&mut self, id: &str) -> Result<&StoredSchema> {
        let source = self
            .get(id)
            .ok_or_else(|| StudioError::NotFound(id.to_string()))?;

        let mut schema = source.schema.clone();
        let title = schema.title.as_deref().unwrap_or("Schema");
        schema.title = Some(format!("{title}_copy"));

        Ok(self.insert(schema))
    }

    /// Remove a schema from the list
    pub fn delete(&mut self, id: &str) -> Result<StoredSchema> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| StudioError::NotFound(id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Import a document from JSON text.
    ///
    /// The parsed value passes through to the model as-is (unknown keywords
    /// and all); only a missing title is filled in. Parse failures surface
    /// as an error for the caller to report, leaving the store untouched.
    pub fn import_json(&mut self, text: &str) -> Result<&StoredSchema> {
        let mut schema: Schema = serde_json::from_str(text)?;
        if schema.title.is_none() {
            schema.title = Some(IMPORTED_TITLE.to_string());
        }
        Ok(self.insert(schema))
    }

    /// Serialize one stored document as pretty-printed JSON Schema text,
    /// with the store's identity fields stripped
    pub fn export_json(&self, id: &str) -> Result<String> {
        let entry = self
            .get(id)
            .ok_or_else(|| StudioError::NotFound(id.to_string()))?;
        Ok(serde_json::to_string_pretty(&entry.schema)?)
    }
}
