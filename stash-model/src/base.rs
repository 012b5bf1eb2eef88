use chrono::{DateTime, Utc};
use serde_json::Value;
use stash_types::timestamp;
use uuid::Uuid;

use crate::{FieldMap, ModelResult, require_str};

/// Identity and timestamp carrier embedded by every concrete entity variant.
///
/// Owns the three fields common to all stored objects and their on-disk
/// grammar; variants delegate the base part of the [`Entity`](crate::Entity)
/// contract to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEntity {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BaseEntity {
    /// Creates a fresh identity: random UUID v4 id, both timestamps now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Creates an identity with a caller-supplied id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Bumps `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Rehydrates the base fields from a record.
    pub fn from_fields(fields: &FieldMap) -> ModelResult<Self> {
        let id = require_str(fields, "id")?.to_string();
        let created_at = timestamp::parse(require_str(fields, "created_at")?)?;
        let updated_at = timestamp::parse(require_str(fields, "updated_at")?)?;
        Ok(Self {
            id,
            created_at,
            updated_at,
        })
    }

    /// Writes the base fields into a record.
    pub fn write_fields(&self, out: &mut FieldMap) {
        out.insert("id".into(), Value::String(self.id.clone()));
        out.insert(
            "created_at".into(),
            Value::String(timestamp::format(&self.created_at)),
        );
        out.insert(
            "updated_at".into(),
            Value::String(timestamp::format(&self.updated_at)),
        );
    }
}

impl Default for BaseEntity {
    fn default() -> Self {
        Self::new()
    }
}
