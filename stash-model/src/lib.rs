//! Entity contract for Stash.
//!
//! Defines the types the storage engine depends on:
//! - [`Entity`] — the object-safe capability set every stored object exposes
//! - [`BaseEntity`] — id and timestamp carrier embedded by concrete variants
//! - [`EntityRegistry`] — type-name → constructor table used on reload
//!
//! Concrete entity variants (users, places, etc.) live in the application;
//! the engine only ever sees them through [`Entity`] and, for
//! reconstruction, [`EntityVariant`].

mod base;
mod entity;
mod registry;

pub use base::BaseEntity;
pub use entity::{Entity, EntityVariant, FieldMap, SharedEntity, field_str, require_str};
pub use registry::EntityRegistry;

/// Result type alias using the crate's error type.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors raised while constructing or serializing entities.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No constructor is registered for a type-name prefix found on disk.
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    /// A required field is absent from a record.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A field is present but holds the wrong JSON type.
    #[error("invalid field {field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// Key or timestamp grammar violation.
    #[error(transparent)]
    Types(#[from] stash_types::Error),
}
