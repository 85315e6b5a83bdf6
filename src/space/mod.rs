//! The parking space lifecycle controller.
//!
//! A [`ParkingSpace`] owns its status and transaction history. Status only
//! changes through the guarded operations (or the explicit administrative
//! override), and history only grows through
//! [`add_transaction`](ParkingSpace::add_transaction).
//!
//! # Example
//!
//! ```rust
//! use parking_space::core::{ParkingSpaceTransaction, SpaceStatus};
//! use parking_space::space::{ParkingSpace, TransitionError};
//!
//! let mut space = ParkingSpace::new("A-12");
//! assert_eq!(space.status(), SpaceStatus::Vacant);
//!
//! space.occupy()?;
//! space.add_transaction(ParkingSpaceTransaction::new("vehicle arrived"));
//! assert_eq!(space.status(), SpaceStatus::Occupied);
//!
//! // Occupied spaces cannot be taken offline directly.
//! assert!(space.remove_from_service().is_err());
//! assert_eq!(space.status(), SpaceStatus::Occupied);
//! # Ok::<(), TransitionError>(())
//! ```

mod error;
mod shared;

pub use error::TransitionError;
pub use shared::SharedParkingSpace;

use crate::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus, TransactionHistory};
use crate::storage::validation::validate_record;
use crate::storage::{SpaceId, SpaceRecord, StorageError};

/// A single parking space and its occupancy lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkingSpace {
    id: Option<SpaceId>,
    name: String,
    status: SpaceStatus,
    transactions: TransactionHistory,
}

impl ParkingSpace {
    /// Create an unsaved space: vacant, empty history, no id yet.
    ///
    /// Ids are handed out by a [`SpaceRepository`](crate::storage::SpaceRepository)
    /// when the space is first persisted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            status: SpaceStatus::Vacant,
            transactions: TransactionHistory::new(),
        }
    }

    /// Repository-assigned id, `None` until the space has been persisted.
    pub fn id(&self) -> Option<SpaceId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status (pure)
    pub fn status(&self) -> SpaceStatus {
        self.status
    }

    /// Read-only view of the history, oldest first.
    pub fn transactions(&self) -> &[ParkingSpaceTransaction] {
        self.transactions.as_slice()
    }

    /// VACANT -> OCCUPIED
    pub fn occupy(&mut self) -> Result<(), TransitionError> {
        self.apply(SpaceOperation::Occupy).map(|_| ())
    }

    /// OCCUPIED -> VACANT
    pub fn vacate(&mut self) -> Result<(), TransitionError> {
        self.apply(SpaceOperation::Vacate).map(|_| ())
    }

    /// VACANT -> OUT_OF_SERVICE
    pub fn remove_from_service(&mut self) -> Result<(), TransitionError> {
        self.apply(SpaceOperation::RemoveFromService).map(|_| ())
    }

    /// OUT_OF_SERVICE -> VACANT
    pub fn put_into_service(&mut self) -> Result<(), TransitionError> {
        self.apply(SpaceOperation::PutIntoService).map(|_| ())
    }

    /// Apply a guarded operation, returning the new status.
    ///
    /// When the current status is not the operation's source state the call
    /// fails with [`TransitionError::InvalidTransition`] and nothing changes.
    /// Only `status` is touched on success.
    pub fn apply(&mut self, operation: SpaceOperation) -> Result<SpaceStatus, TransitionError> {
        let target = operation
            .resolve(self.status)
            .ok_or(TransitionError::InvalidTransition {
                operation,
                required: operation.source(),
                actual: self.status,
            })?;
        self.status = target;
        Ok(target)
    }

    /// Apply a guarded operation and, only if it succeeds, append
    /// `transaction` to the history.
    pub fn apply_and_record(
        &mut self,
        operation: SpaceOperation,
        transaction: ParkingSpaceTransaction,
    ) -> Result<SpaceStatus, TransitionError> {
        let target = self.apply(operation)?;
        self.transactions.append(transaction);
        Ok(target)
    }

    /// Administrative override: set the status to anything, unconditionally.
    ///
    /// This bypasses the transition table entirely. No precondition is
    /// checked and no error is possible. It exists for restoring persisted
    /// state and for operator corrections; normal lifecycle changes must go
    /// through [`apply`](Self::apply) or the named operations.
    pub fn set_status(&mut self, status: SpaceStatus) {
        self.status = status;
    }

    /// Append a record to the end of the history.
    ///
    /// Independent of the status: no guard applies and the record's content
    /// is not inspected.
    pub fn add_transaction(&mut self, transaction: ParkingSpaceTransaction) {
        self.transactions.append(transaction);
    }

    /// Bind a freshly allocated id to an unsaved space.
    ///
    /// Meant for [`SpaceRepository`](crate::storage::SpaceRepository)
    /// implementations. Fails if the space already carries an id.
    pub fn persisted_as(mut self, id: SpaceId) -> Result<Self, StorageError> {
        if let Some(existing) = self.id {
            return Err(StorageError::AlreadyPersisted(existing));
        }
        self.id = Some(id);
        Ok(self)
    }

    /// Persistence tuple for this space. Unsaved spaces have no record.
    pub fn to_record(&self) -> Result<SpaceRecord, StorageError> {
        let id = self.id.ok_or_else(|| StorageError::NotPersisted {
            name: self.name.clone(),
        })?;
        Ok(SpaceRecord {
            id,
            name: self.name.clone(),
            status: self.status,
            transactions: self.transactions.as_slice().to_vec(),
        })
    }

    /// Rebuild a space from its persisted tuple.
    ///
    /// All record problems are reported together; on failure no space is
    /// produced.
    pub fn from_record(record: SpaceRecord) -> Result<Self, StorageError> {
        validate_record(&record)?;
        Ok(Self {
            id: Some(record.id),
            name: record.name,
            status: record.status,
            transactions: TransactionHistory::from(record.transactions),
        })
    }
}
