use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{EntityVariant, FieldMap, ModelError, ModelResult, SharedEntity};

/// Constructor for one entity variant.
type EntityFactory = Box<dyn Fn(&FieldMap) -> ModelResult<SharedEntity>>;

/// Type-name → constructor table used during reload reconstruction.
///
/// Populated at startup with every variant the application persists, then
/// injected into the store. Looking up an unregistered name is an error,
/// never a silent drop.
#[derive(Default)]
pub struct EntityRegistry {
    factories: HashMap<String, EntityFactory>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variant under its `TYPE_NAME`.
    ///
    /// Re-registering a name replaces the previous constructor.
    pub fn register<V: EntityVariant>(&mut self) {
        self.register_factory(V::TYPE_NAME, |fields| {
            let entity: SharedEntity = Rc::new(RefCell::new(V::from_fields(fields)?));
            Ok(entity)
        });
    }

    /// Registers a raw constructor closure under an explicit type name.
    pub fn register_factory<F>(&mut self, type_name: &str, factory: F)
    where
        F: Fn(&FieldMap) -> ModelResult<SharedEntity> + 'static,
    {
        self.factories.insert(type_name.to_string(), Box::new(factory));
    }

    /// True if a constructor is registered for `type_name`.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Constructs an entity of the named variant from its field mapping.
    ///
    /// Fails with [`ModelError::UnknownEntityType`] when no constructor is
    /// registered for `type_name`.
    pub fn construct(&self, type_name: &str, fields: &FieldMap) -> ModelResult<SharedEntity> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| ModelError::UnknownEntityType(type_name.to_string()))?;
        factory(fields)
    }
}
