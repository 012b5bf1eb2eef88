use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{ModelError, ModelResult};

/// Flat field-name → value mapping; the serialized form of one entity.
pub type FieldMap = Map<String, Value>;

/// Shared handle to a stored entity.
///
/// The store and the caller hold the same instance; `RefCell` lets the
/// store bump `updated_at` during save through a shared handle. The engine
/// is single-threaded, hence `Rc` rather than `Arc`.
pub type SharedEntity = Rc<RefCell<dyn Entity>>;

/// The capability set every stored object exposes to the engine.
///
/// Object-safe: the store works exclusively with `dyn Entity` and never
/// learns the concrete variant. Callers that need the variant back after a
/// reload go through [`Entity::as_any`].
pub trait Entity: Any {
    /// Stable variant name used as the registry-key prefix.
    /// Must not contain `.`.
    fn type_name(&self) -> &'static str;

    /// Unique id, set before the entity is handed to the store.
    fn id(&self) -> &str;

    /// Creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Last-modification timestamp.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Bumps `updated_at` to the current time. Invoked by the store on
    /// every entity as part of its save convention.
    fn touch(&mut self);

    /// Serializes the entity to its flat field mapping, including `id`,
    /// `created_at` and `updated_at`.
    fn to_fields(&self) -> FieldMap;

    /// Downcast seam for callers that need the concrete variant back.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast seam, e.g. for editing a reloaded entity.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A constructible entity variant: what a type must provide to be
/// reconstructed from disk.
pub trait EntityVariant: Entity + Sized {
    /// The variant name used as the key prefix for all instances.
    const TYPE_NAME: &'static str;

    /// Rehydrates an instance from its flat field mapping.
    fn from_fields(fields: &FieldMap) -> ModelResult<Self>;
}

/// Looks up an optional string field.
#[must_use]
pub fn field_str<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Looks up a required string field, reporting the precise cause on failure.
pub fn require_str<'a>(fields: &'a FieldMap, name: &str) -> ModelResult<&'a str> {
    match fields.get(name) {
        None => Err(ModelError::MissingField(name.to_string())),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ModelError::InvalidField {
            field: name.to_string(),
            expected: "string",
        }),
    }
}
