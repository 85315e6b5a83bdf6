//! Event-source facade over a repository.
//!
//! Callers that decide a space should change (sensors, operators, API
//! handlers) go through [`SpaceService`]: it loads the space, applies the
//! guarded operation and persists the outcome. Rejected transitions are
//! never persisted.

use super::{SpaceId, SpaceRepository, StorageError};
use crate::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
use crate::space::{ParkingSpace, TransitionError};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by [`SpaceService`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpaceServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Applies lifecycle changes to stored spaces.
///
/// Load, apply and save for one call happen under a single lock, so two
/// callers can never both pass the same guard against a stale copy. The
/// repository is owned and not handed out, so writes cannot skip that lock.
pub struct SpaceService<R: SpaceRepository> {
    repository: R,
    write_lock: Mutex<()>,
}

impl<R: SpaceRepository> SpaceService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Register a new vacant space.
    pub fn register(&self, name: impl Into<String>) -> Result<ParkingSpace, SpaceServiceError> {
        let space = self.repository.insert(ParkingSpace::new(name))?;
        Ok(space)
    }

    /// Current stored state of a space.
    pub fn get(&self, id: SpaceId) -> Result<ParkingSpace, SpaceServiceError> {
        Ok(self.repository.load(id)?)
    }

    /// Apply a guarded operation and persist the new status.
    pub fn execute(
        &self,
        id: SpaceId,
        operation: SpaceOperation,
    ) -> Result<SpaceStatus, SpaceServiceError> {
        self.mutate(id, operation, |space| space.apply(operation))
    }

    /// Apply a guarded operation and, on success, persist it together with
    /// `transaction`.
    pub fn execute_and_record(
        &self,
        id: SpaceId,
        operation: SpaceOperation,
        transaction: ParkingSpaceTransaction,
    ) -> Result<SpaceStatus, SpaceServiceError> {
        self.mutate(id, operation, |space| {
            space.apply_and_record(operation, transaction)
        })
    }

    /// Append a transaction without changing status.
    pub fn record(
        &self,
        id: SpaceId,
        transaction: ParkingSpaceTransaction,
    ) -> Result<usize, SpaceServiceError> {
        let _guard = self.write_lock.lock();
        let mut space = self.repository.load(id)?;
        space.add_transaction(transaction);
        self.repository.save(&space)?;
        debug!(
            space_id = %id,
            transactions = space.transactions().len(),
            "transaction recorded"
        );
        Ok(space.transactions().len())
    }

    /// Administrative override: force a status without guard checks.
    pub fn override_status(
        &self,
        id: SpaceId,
        status: SpaceStatus,
    ) -> Result<(), SpaceServiceError> {
        let _guard = self.write_lock.lock();
        let mut space = self.repository.load(id)?;
        let previous = space.status();
        space.set_status(status);
        self.repository.save(&space)?;
        warn!(
            space_id = %id,
            from = %previous,
            to = %status,
            "status overridden without transition guard"
        );
        Ok(())
    }

    fn mutate(
        &self,
        id: SpaceId,
        operation: SpaceOperation,
        change: impl FnOnce(&mut ParkingSpace) -> Result<SpaceStatus, TransitionError>,
    ) -> Result<SpaceStatus, SpaceServiceError> {
        let _guard = self.write_lock.lock();
        let mut space = self.repository.load(id)?;

        let status = change(&mut space).map_err(|err| {
            warn!(
                space_id = %id,
                operation = %operation,
                status = %err.actual(),
                "transition rejected"
            );
            err
        })?;

        self.repository.save(&space)?;
        debug!(space_id = %id, operation = %operation, status = %status, "transition applied");
        Ok(status)
    }
}
