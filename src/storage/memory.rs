//! In-memory space repository.

use super::validation::validate_record;
use super::{SpaceId, SpaceRecord, SpaceRepository, StorageError};
use crate::space::ParkingSpace;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Repository holding records in a process-local map.
///
/// Ids are allocated from a counter starting at 1 (configurable with
/// [`with_first_id`](Self::with_first_id)) and are never reused, even after
/// [`remove`](SpaceRepository::remove).
#[derive(Debug)]
pub struct InMemoryRepository {
    records: RwLock<BTreeMap<SpaceId, SpaceRecord>>,
    next_id: AtomicU64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::with_first_id(1)
    }

    /// Start allocating ids at `first`. Zero is reserved and bumped to 1.
    pub fn with_first_id(first: u64) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(first.max(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Raw stored record, bypassing restoration.
    pub fn record(&self, id: SpaceId) -> Option<SpaceRecord> {
        self.records.read().get(&id).cloned()
    }

    fn allocate(&self) -> SpaceId {
        SpaceId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceRepository for InMemoryRepository {
    fn insert(&self, space: ParkingSpace) -> Result<ParkingSpace, StorageError> {
        if let Some(existing) = space.id() {
            warn!(space_id = %existing, "insert of already persisted space refused");
            return Err(StorageError::AlreadyPersisted(existing));
        }

        let space = space.persisted_as(self.allocate())?;
        let record = space.to_record()?;
        validate_record(&record)?;
        debug!(
            space_id = %record.id,
            name = %record.name,
            status = %record.status,
            "parking space inserted"
        );
        self.records.write().insert(record.id, record);
        Ok(space)
    }

    fn load(&self, id: SpaceId) -> Result<ParkingSpace, StorageError> {
        let Some(record) = self.record(id) else {
            warn!(space_id = %id, "parking space not found");
            return Err(StorageError::NotFound(id));
        };
        ParkingSpace::from_record(record)
    }

    fn save(&self, space: &ParkingSpace) -> Result<(), StorageError> {
        let record = space.to_record()?;
        validate_record(&record)?;
        let mut records = self.records.write();
        let Some(slot) = records.get_mut(&record.id) else {
            warn!(space_id = %record.id, "save of unknown parking space refused");
            return Err(StorageError::NotFound(record.id));
        };
        debug!(
            space_id = %record.id,
            status = %record.status,
            transactions = record.transactions.len(),
            "parking space saved"
        );
        *slot = record;
        Ok(())
    }

    fn remove(&self, id: SpaceId) -> Result<ParkingSpace, StorageError> {
        let mut records = self.records.write();
        let Some(record) = records.get(&id) else {
            warn!(space_id = %id, "remove of unknown parking space refused");
            return Err(StorageError::NotFound(id));
        };
        // Restore before dropping so a failed restore leaves the store intact.
        let space = ParkingSpace::from_record(record.clone())?;
        records.remove(&id);
        debug!(space_id = %id, "parking space removed");
        Ok(space)
    }

    fn list(&self) -> Vec<SpaceId> {
        self.records.read().keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ParkingSpaceTransaction, SpaceStatus};

    #[test]
    fn insert_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        let a = repo.insert(ParkingSpace::new("A-1")).unwrap();
        let b = repo.insert(ParkingSpace::new("A-2")).unwrap();

        assert_eq!(a.id(), Some(SpaceId::new(1)));
        assert_eq!(b.id(), Some(SpaceId::new(2)));
        assert_eq!(repo.list(), vec![SpaceId::new(1), SpaceId::new(2)]);
    }

    #[test]
    fn first_id_is_configurable() {
        let repo = InMemoryRepository::with_first_id(100);
        let space = repo.insert(ParkingSpace::new("P-100")).unwrap();
        assert_eq!(space.id(), Some(SpaceId::new(100)));

        let zero = InMemoryRepository::with_first_id(0);
        let space = zero.insert(ParkingSpace::new("P-1")).unwrap();
        assert_eq!(space.id(), Some(SpaceId::new(1)));
    }

    #[test]
    fn insert_refuses_persisted_space() {
        let repo = InMemoryRepository::new();
        let space = repo.insert(ParkingSpace::new("A-1")).unwrap();

        assert_eq!(
            repo.insert(space),
            Err(StorageError::AlreadyPersisted(SpaceId::new(1)))
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn save_then_load_roundtrips_state() {
        let repo = InMemoryRepository::new();
        let mut space = repo.insert(ParkingSpace::new("A-1")).unwrap();
        space.occupy().unwrap();
        space.add_transaction(ParkingSpaceTransaction::new("arrival"));
        repo.save(&space).unwrap();

        let id = space.id().unwrap();
        let loaded = repo.load(id).unwrap();
        assert_eq!(loaded, space);
        assert_eq!(loaded.status(), SpaceStatus::Occupied);
    }

    #[test]
    fn save_of_unsaved_space_fails() {
        let repo = InMemoryRepository::new();
        let result = repo.save(&ParkingSpace::new("ghost"));
        assert!(matches!(result, Err(StorageError::NotPersisted { .. })));
    }

    #[test]
    fn save_after_remove_fails() {
        let repo = InMemoryRepository::new();
        let space = repo.insert(ParkingSpace::new("A-1")).unwrap();
        let id = space.id().unwrap();

        repo.remove(id).unwrap();
        assert_eq!(repo.save(&space), Err(StorageError::NotFound(id)));
        assert_eq!(repo.load(id), Err(StorageError::NotFound(id)));
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let repo = InMemoryRepository::new();
        let first = repo.insert(ParkingSpace::new("A-1")).unwrap();
        repo.remove(first.id().unwrap()).unwrap();

        let second = repo.insert(ParkingSpace::new("A-2")).unwrap();
        assert_eq!(second.id(), Some(SpaceId::new(2)));
    }

    #[test]
    fn insert_rejects_invalid_space() {
        let repo = InMemoryRepository::new();
        let result = repo.insert(ParkingSpace::new(""));

        assert!(matches!(result, Err(StorageError::InvalidRecord(_))));
        assert!(repo.is_empty());
    }

    #[test]
    fn repeated_transaction_survives_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut space = repo.insert(ParkingSpace::new("A-1")).unwrap();
        let txn = ParkingSpaceTransaction::new("resent by gateway");
        space.add_transaction(txn.clone());
        space.add_transaction(txn);
        repo.save(&space).unwrap();

        let loaded = repo.load(space.id().unwrap()).unwrap();
        assert_eq!(loaded, space);
        assert_eq!(loaded.transactions().len(), 2);
    }

    #[test]
    fn failed_restore_on_remove_keeps_record() {
        let repo = InMemoryRepository::new();
        let id = SpaceId::new(7);
        repo.records.write().insert(
            id,
            SpaceRecord {
                id,
                name: String::new(),
                status: SpaceStatus::Vacant,
                transactions: Vec::new(),
            },
        );

        assert!(matches!(
            repo.remove(id),
            Err(StorageError::InvalidRecord(_))
        ));
        assert_eq!(repo.list(), vec![id]);
        assert!(repo.record(id).is_some());
    }

    #[test]
    fn remove_returns_last_state() {
        let repo = InMemoryRepository::new();
        let mut space = repo.insert(ParkingSpace::new("A-1")).unwrap();
        space.remove_from_service().unwrap();
        repo.save(&space).unwrap();

        let removed = repo.remove(space.id().unwrap()).unwrap();
        assert_eq!(removed, space);
        assert!(repo.is_empty());
    }
}
