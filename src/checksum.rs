//! Checksum utilities for store integrity

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 checksum of a schema document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Compute checksum from a schema serialized to JSON
    pub fn from_schema(schema: &crate::schema::Schema) -> Self {
        let canonical = serde_json::to_string(schema).unwrap_or_default();
        let hash = Sha256::digest(canonical.as_bytes());
        Self(format!("{:x}", hash))
    }

    /// Hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a schema still matches this checksum
    pub fn verify(&self, schema: &crate::schema::Schema) -> bool {
        *self == Self::from_schema(schema)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
