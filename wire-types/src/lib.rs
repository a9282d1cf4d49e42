//! Core type definitions for the wire field model.
//!
//! This crate defines the small, storage-agnostic types shared by the
//! schema layer:
//! - Field identifiers, with `0` reserved for "not a real field"
//! - The crate-wide error and result types
//!
//! Field objects themselves (real and null) live in `wire-model`.

mod ids;

pub use ids::FieldId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in field model operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid field id: {0}")]
    InvalidId(String),

    #[error("invalid value for attribute '{key}': {reason}")]
    InvalidAttribute { key: String, reason: String },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("field is not persisted: {0}")]
    NotPersisted(String),

    #[error("duplicate field name: {0}")]
    DuplicateName(String),
}
