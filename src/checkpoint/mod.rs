//! Checkpoint and restore for parking spaces.
//!
//! A checkpoint is a versioned snapshot of a persisted space's record. It
//! can be written as JSON for readability or as bincode for compactness,
//! and restoring it runs the same checks as loading from a repository.

use crate::space::ParkingSpace;
use crate::storage::SpaceRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Encoding used for checkpoint bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckpointFormat {
    #[default]
    Json,
    Binary,
}

/// Serializable snapshot of one space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Captured state
    pub record: SpaceRecord,
}

impl SpaceCheckpoint {
    /// Capture a persisted space. Unsaved spaces cannot be checkpointed.
    pub fn capture(space: &ParkingSpace) -> Result<Self, CheckpointError> {
        Ok(Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            record: space.to_record()?,
        })
    }

    /// Rebuild the captured space.
    pub fn restore(self) -> Result<ParkingSpace, CheckpointError> {
        Ok(ParkingSpace::from_record(self.record)?)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    /// Encode in the chosen format.
    pub fn encode(&self, format: CheckpointFormat) -> Result<Vec<u8>, CheckpointError> {
        match format {
            CheckpointFormat::Json => self.to_json().map(String::into_bytes),
            CheckpointFormat::Binary => self.to_binary(),
        }
    }

    /// Decode bytes produced by [`encode`](Self::encode) with the same format.
    pub fn decode(bytes: &[u8], format: CheckpointFormat) -> Result<Self, CheckpointError> {
        match format {
            CheckpointFormat::Json => {
                let json = std::str::from_utf8(bytes)
                    .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
                Self::from_json(json)
            }
            CheckpointFormat::Binary => Self::from_binary(bytes),
        }
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}
