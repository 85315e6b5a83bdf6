//! End-to-end tests across the service, repository and checkpoint layers.

use parking_space::checkpoint::{CheckpointFormat, SpaceCheckpoint};
use parking_space::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
use parking_space::storage::{InMemoryRepository, SpaceService, SpaceServiceError};
use parking_space::{SpaceRepository, TransitionError};
use std::sync::Arc;
use std::thread;

#[test]
fn full_lifecycle_through_service() {
    let service = SpaceService::new(InMemoryRepository::new());
    let id = service.register("Level 1 / 07").unwrap().id().unwrap();

    let steps = [
        SpaceOperation::Occupy,
        SpaceOperation::Vacate,
        SpaceOperation::RemoveFromService,
        SpaceOperation::PutIntoService,
        SpaceOperation::Occupy,
    ];
    for op in steps {
        service
            .execute_and_record(id, op, ParkingSpaceTransaction::new(op.name()))
            .unwrap();
    }

    let space = service.get(id).unwrap();
    assert_eq!(space.status(), SpaceStatus::Occupied);
    let recorded: Vec<_> = space
        .transactions()
        .iter()
        .map(|t| t.details.as_str())
        .collect();
    assert_eq!(
        recorded,
        [
            "occupy",
            "vacate",
            "remove_from_service",
            "put_into_service",
            "occupy"
        ]
    );
}

#[test]
fn occupied_space_must_pass_through_vacant_to_go_offline() {
    let service = SpaceService::new(InMemoryRepository::new());
    let id = service.register("B-2").unwrap().id().unwrap();
    service.execute(id, SpaceOperation::Occupy).unwrap();

    let err = service
        .execute(id, SpaceOperation::RemoveFromService)
        .unwrap_err();
    assert!(matches!(
        err,
        SpaceServiceError::Transition(TransitionError::InvalidTransition {
            actual: SpaceStatus::Occupied,
            ..
        })
    ));

    service.execute(id, SpaceOperation::Vacate).unwrap();
    service
        .execute(id, SpaceOperation::RemoveFromService)
        .unwrap();
    assert_eq!(
        service.get(id).unwrap().status(),
        SpaceStatus::OutOfService
    );
}

#[test]
fn concurrent_occupy_through_service_has_one_winner() {
    let service = Arc::new(SpaceService::new(InMemoryRepository::new()));
    let id = service.register("C-3").unwrap().id().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.execute(id, SpaceOperation::Occupy).is_ok())
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
}

#[test]
fn checkpoint_survives_repository_restart() {
    let first = InMemoryRepository::new();
    let mut space = first.insert(parking_space::ParkingSpace::new("D-4")).unwrap();
    space.remove_from_service().unwrap();
    space.add_transaction(ParkingSpaceTransaction::new("barrier fault"));
    first.save(&space).unwrap();

    let stored = first.load(space.id().unwrap()).unwrap();
    let bytes = SpaceCheckpoint::capture(&stored)
        .unwrap()
        .encode(CheckpointFormat::Json)
        .unwrap();
    drop(first);

    let restored = SpaceCheckpoint::decode(&bytes, CheckpointFormat::Json)
        .unwrap()
        .restore()
        .unwrap();
    assert_eq!(restored, space);
    assert_eq!(restored.status(), SpaceStatus::OutOfService);
    assert_eq!(restored.transactions().len(), 1);
}
