//! Core type definitions for Stash.
//!
//! This crate defines the fundamental, domain-agnostic types used by the
//! storage engine:
//! - Composite registry keys (`"<TypeName>.<id>"`)
//! - The ISO-8601 timestamp grammar used on disk
//!
//! Domain entity types (users, places, etc.) belong to the application,
//! not here.

mod key;
pub mod timestamp;

pub use key::ObjectKey;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid registry key: {0}")]
    InvalidKey(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
