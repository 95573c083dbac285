//! Core type definitions for the publish decision core.
//!
//! This crate defines the small, store-agnostic types that every other crate
//! in the workspace speaks:
//! - Item and field identifiers (UUID)
//! - Languages, version numbers and database names
//! - Well-known field ids the publishing pipeline reads
//!
//! Item snapshots and field collections live in `publish-model`.

mod ids;
mod scalars;

pub use ids::{FieldId, ItemId};
pub use scalars::{DatabaseName, Language, VersionNumber};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid language: {0:?}")]
    InvalidLanguage(String),

    #[error("invalid database name: {0:?}")]
    InvalidDatabaseName(String),

    #[error("invalid version number: {0}")]
    InvalidVersion(String),
}
