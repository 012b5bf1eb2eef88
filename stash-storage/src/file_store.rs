use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{StoreError, StoreResult};
use stash_model::{EntityRegistry, SharedEntity};
use stash_types::ObjectKey;

/// In-memory registry of live entities with whole-file JSON persistence.
///
/// Holds one entry per registry key (`"<TypeName>.<id>"`). [`save`] writes
/// the entire registry to the store's file, overwriting any prior content;
/// [`reload`] replaces the registry from the file. Entities are shared
/// handles: the mapping stores the same instances the application works
/// with, not copies.
///
/// The store is constructed explicitly and passed to whoever needs it;
/// there is no process-global instance.
///
/// [`save`]: FileStore::save
/// [`reload`]: FileStore::reload
pub struct FileStore {
    file_path: PathBuf,
    objects: BTreeMap<String, SharedEntity>,
    registry: EntityRegistry,
}

impl FileStore {
    /// Default persistence target, relative to the working directory.
    pub const DEFAULT_FILE_PATH: &'static str = "file.json";

    /// Creates an empty store persisting to [`Self::DEFAULT_FILE_PATH`].
    #[must_use]
    pub fn new(registry: EntityRegistry) -> Self {
        Self::with_path(Self::DEFAULT_FILE_PATH, registry)
    }

    /// Creates an empty store persisting to `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>, registry: EntityRegistry) -> Self {
        Self {
            file_path: path.into(),
            objects: BTreeMap::new(),
            registry,
        }
    }

    /// The persistence target.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Registers an entity under `"<type_name>.<id>"`.
    ///
    /// Pure in-memory mutation, no I/O. Inserting a key that already exists
    /// overwrites the previous entry (last write wins).
    pub fn insert(&mut self, entity: SharedEntity) {
        let key = {
            let e = entity.borrow();
            ObjectKey::new(e.type_name(), e.id()).to_string()
        };
        debug!("Registered object {}", key);
        self.objects.insert(key, entity);
    }

    /// The live registry, keyed by `"<TypeName>.<id>"`.
    ///
    /// A direct borrow of the store's own mapping, not a snapshot.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, SharedEntity> {
        &self.objects
    }

    /// Persists the whole registry as one JSON object to the store's file.
    ///
    /// Every entity's `updated_at` is bumped to the current time before it
    /// is serialized. Prior file content is fully overwritten. I/O failures
    /// propagate to the caller; nothing is retried.
    ///
    /// Takes `&self`: the registry's key set and entity identities cannot
    /// change here, only each entity's `updated_at`.
    pub fn save(&self) -> StoreResult<()> {
        let mut records = Map::new();
        for (key, entity) in &self.objects {
            let mut entity = entity.borrow_mut();
            entity.touch();
            records.insert(key.clone(), Value::Object(entity.to_fields()));
        }
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.file_path, json)?;
        debug!("Saved {} objects to {:?}", self.objects.len(), self.file_path);
        Ok(())
    }

    /// Replaces the registry with the contents of the store's file.
    ///
    /// A missing file is a no-op, not an error. Reconstruction is
    /// all-or-nothing: the new registry is built on the side and only
    /// swapped in once every record has been rebuilt, so malformed JSON, an
    /// unknown type prefix or a bad record leaves the in-memory state
    /// untouched.
    pub fn reload(&mut self) -> StoreResult<()> {
        if !self.file_path.exists() {
            debug!("No registry file at {:?}, nothing to reload", self.file_path);
            return Ok(());
        }
        let raw = fs::read_to_string(&self.file_path)?;
        let records: Map<String, Value> = serde_json::from_str(&raw)?;

        let mut objects = BTreeMap::new();
        for (key, record) in records {
            let parsed = ObjectKey::parse(&key)?;
            let fields = record.as_object().ok_or_else(|| StoreError::InvalidRecord {
                key: key.clone(),
                reason: "record is not a JSON object".to_string(),
            })?;
            let entity = self.registry.construct(parsed.type_name(), fields)?;
            {
                // The key decides placement; a divergent embedded id is
                // tolerated but worth surfacing.
                let e = entity.borrow();
                if e.id() != parsed.id() {
                    warn!("Record id {:?} disagrees with key {}", e.id(), key);
                }
            }
            objects.insert(key, entity);
        }
        debug!("Reloaded {} objects from {:?}", objects.len(), self.file_path);
        self.objects = objects;
        Ok(())
    }
}
