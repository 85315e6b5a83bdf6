//! Shared handle for a space mutated from several threads.

use super::{ParkingSpace, TransitionError};
use crate::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one [`ParkingSpace`].
///
/// Every call takes the lock exactly once, so a transition's guard check and
/// assignment cannot interleave with another transition or append on the
/// same space. Readers get owned snapshots rather than references into the
/// locked value.
#[derive(Clone, Debug)]
pub struct SharedParkingSpace {
    inner: Arc<Mutex<ParkingSpace>>,
}

impl SharedParkingSpace {
    pub fn new(space: ParkingSpace) -> Self {
        Self {
            inner: Arc::new(Mutex::new(space)),
        }
    }

    pub fn status(&self) -> SpaceStatus {
        self.inner.lock().status()
    }

    /// Owned copy of the space at this instant.
    pub fn snapshot(&self) -> ParkingSpace {
        self.inner.lock().clone()
    }

    /// Copy of the history at this instant.
    pub fn transactions(&self) -> Vec<ParkingSpaceTransaction> {
        self.inner.lock().transactions().to_vec()
    }

    pub fn apply(&self, operation: SpaceOperation) -> Result<SpaceStatus, TransitionError> {
        self.inner.lock().apply(operation)
    }

    pub fn apply_and_record(
        &self,
        operation: SpaceOperation,
        transaction: ParkingSpaceTransaction,
    ) -> Result<SpaceStatus, TransitionError> {
        self.inner.lock().apply_and_record(operation, transaction)
    }

    pub fn occupy(&self) -> Result<(), TransitionError> {
        self.inner.lock().occupy()
    }

    pub fn vacate(&self) -> Result<(), TransitionError> {
        self.inner.lock().vacate()
    }

    pub fn remove_from_service(&self) -> Result<(), TransitionError> {
        self.inner.lock().remove_from_service()
    }

    pub fn put_into_service(&self) -> Result<(), TransitionError> {
        self.inner.lock().put_into_service()
    }

    /// Unguarded override, see [`ParkingSpace::set_status`].
    pub fn set_status(&self, status: SpaceStatus) {
        self.inner.lock().set_status(status);
    }

    pub fn add_transaction(&self, transaction: ParkingSpaceTransaction) {
        self.inner.lock().add_transaction(transaction);
    }

    /// Take the space back if this is the last handle.
    pub fn try_unwrap(self) -> Result<ParkingSpace, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl From<ParkingSpace> for SharedParkingSpace {
    fn from(space: ParkingSpace) -> Self {
        Self::new(space)
    }
}
