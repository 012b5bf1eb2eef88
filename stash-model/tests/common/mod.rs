//! Shared entity fixtures for the model tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;

use stash_model::{
    BaseEntity, Entity, EntityVariant, FieldMap, ModelResult, require_str,
};

/// Minimal user variant: base identity plus a display name.
#[derive(Debug)]
pub struct User {
    pub base: BaseEntity,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseEntity::new(),
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base: BaseEntity::with_id(id),
            name: name.into(),
        }
    }
}

impl Entity for User {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn id(&self) -> &str {
        self.base.id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at()
    }

    fn touch(&mut self) {
        self.base.touch();
    }

    fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.base.write_fields(&mut fields);
        fields.insert("name".into(), Value::String(self.name.clone()));
        fields
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl EntityVariant for User {
    const TYPE_NAME: &'static str = "User";

    fn from_fields(fields: &FieldMap) -> ModelResult<Self> {
        Ok(Self {
            base: BaseEntity::from_fields(fields)?,
            name: require_str(fields, "name")?.to_string(),
        })
    }
}

/// Second variant, to exercise multi-type dispatch.
#[derive(Debug)]
pub struct Place {
    pub base: BaseEntity,
    pub city: String,
}

impl Place {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            base: BaseEntity::new(),
            city: city.into(),
        }
    }
}

impl Entity for Place {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn id(&self) -> &str {
        self.base.id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at()
    }

    fn touch(&mut self) {
        self.base.touch();
    }

    fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.base.write_fields(&mut fields);
        fields.insert("city".into(), Value::String(self.city.clone()));
        fields
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl EntityVariant for Place {
    const TYPE_NAME: &'static str = "Place";

    fn from_fields(fields: &FieldMap) -> ModelResult<Self> {
        Ok(Self {
            base: BaseEntity::from_fields(fields)?,
            city: require_str(fields, "city")?.to_string(),
        })
    }
}

/// A field map with valid base fields plus a `name`.
pub fn user_fields(id: &str, name: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("id".into(), Value::String(id.into()));
    fields.insert(
        "created_at".into(),
        Value::String("2023-01-01T00:00:00.000000Z".into()),
    );
    fields.insert(
        "updated_at".into(),
        Value::String("2023-01-02T00:00:00.000000Z".into()),
    );
    fields.insert("name".into(), Value::String(name.into()));
    fields
}
