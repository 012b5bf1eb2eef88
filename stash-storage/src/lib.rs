//! JSON file storage engine for Stash.
//!
//! Provides whole-file persistence for an in-memory registry of entities.
//! The registry maps composite keys (`"<TypeName>.<id>"`) to live entity
//! handles; `save` serializes every entry into a single JSON document and
//! `reload` rebuilds the registry from it at startup.
//!
//! # Architecture
//!
//! - Entities are shared handles; the caller and the store see the same instance
//! - Serialization is one flat field map per entity, keyed by registry key
//! - Reload dispatches each record to its variant constructor through an
//!   injected [`EntityRegistry`](stash_model::EntityRegistry)
//! - Single-threaded and synchronous; callers own any recovery policy

mod error;
mod file_store;

pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
