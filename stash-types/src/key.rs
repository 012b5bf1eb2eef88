//! Composite registry keys.
//!
//! Every object in the store is addressed by `"<TypeName>.<id>"`. The type
//! name is the entity's runtime variant name and never contains `.`; the id
//! may, so parsing splits at the first separator.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A composite registry key: entity type name plus entity id.
///
/// Keys are unique within a registry. The rendered form is what appears as
/// the top-level keys of the persisted JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey {
    type_name: String,
    id: String,
}

impl ObjectKey {
    /// Creates a key from a type name and id.
    ///
    /// Callers uphold the key invariants: a non-empty type name without `.`
    /// and a non-empty id. Keys read back from disk go through
    /// [`ObjectKey::parse`], which enforces them.
    #[must_use]
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    /// Returns the type-name prefix.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the id component.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parses a key from its rendered `"<TypeName>.<id>"` form.
    pub fn parse(s: &str) -> crate::Result<Self> {
        s.parse()
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.id)
    }
}

impl FromStr for ObjectKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_name, id) = s
            .split_once('.')
            .ok_or_else(|| Error::InvalidKey(format!("missing `.` separator in {s:?}")))?;
        if type_name.is_empty() {
            return Err(Error::InvalidKey(format!("empty type name in {s:?}")));
        }
        if id.is_empty() {
            return Err(Error::InvalidKey(format!("empty id in {s:?}")));
        }
        Ok(Self {
            type_name: type_name.to_string(),
            id: id.to_string(),
        })
    }
}
