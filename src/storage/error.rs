//! Storage error types.

use super::SpaceId;
use thiserror::Error;

/// A single problem found while restoring a persisted record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordViolation {
    #[error("Space name is empty")]
    EmptyName,

    #[error("Space id 0 is reserved")]
    ReservedId,
}

/// Errors that can occur when persisting or restoring spaces
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No record is stored under this id
    #[error("Parking space {0} not found")]
    NotFound(SpaceId),

    /// The space already carries an id and cannot be inserted again
    #[error("Parking space already persisted as {0}")]
    AlreadyPersisted(SpaceId),

    /// The space has never been inserted, so it has no id to save under
    #[error("Parking space '{name}' has not been persisted")]
    NotPersisted { name: String },

    /// The record failed restoration checks
    #[error("Invalid parking space record: {}", describe(.0))]
    InvalidRecord(Vec<RecordViolation>),
}

fn describe(violations: &[RecordViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
