//! Persistence boundary for parking spaces.
//!
//! The lifecycle controller never does I/O. Storage providers implement
//! [`SpaceRepository`]: they allocate ids, keep the persisted
//! `(id, name, status, transactions)` tuple and rebuild equivalent
//! [`ParkingSpace`] values on load.

pub mod error;
pub mod memory;
pub mod service;
pub mod validation;

pub use error::{RecordViolation, StorageError};
pub use memory::InMemoryRepository;
pub use service::{SpaceService, SpaceServiceError};

use crate::core::{ParkingSpaceTransaction, SpaceStatus};
use crate::space::ParkingSpace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted space. Allocated by a repository, never reused
/// for another space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(u64);

impl SpaceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Persisted form of a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRecord {
    pub id: SpaceId,
    pub name: String,
    pub status: SpaceStatus,
    /// Oldest first
    pub transactions: Vec<ParkingSpaceTransaction>,
}

/// Storage provider for parking spaces.
///
/// Implementations must hand out each id at most once and must never
/// expose a space whose insert failed.
pub trait SpaceRepository: Send + Sync {
    /// Persist an unsaved space, returning it with its new id.
    fn insert(&self, space: ParkingSpace) -> Result<ParkingSpace, StorageError>;

    /// Rebuild the space stored under `id`.
    fn load(&self, id: SpaceId) -> Result<ParkingSpace, StorageError>;

    /// Overwrite the stored state of an already persisted space.
    fn save(&self, space: &ParkingSpace) -> Result<(), StorageError>;

    /// Drop the stored space, returning its last state.
    fn remove(&self, id: SpaceId) -> Result<ParkingSpace, StorageError>;

    /// Ids of every stored space, ascending.
    fn list(&self) -> Vec<SpaceId>;
}
