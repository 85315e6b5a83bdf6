//! Space Lifecycle
//!
//! This example walks one parking space through its lifecycle.
//!
//! Key concepts:
//! - Guarded transitions that refuse to run from the wrong state
//! - Recording transactions alongside transitions
//! - The administrative override
//! - Checkpointing the persisted record
//!
//! Run with: cargo run --example space_lifecycle

use parking_space::checkpoint::{CheckpointFormat, SpaceCheckpoint};
use parking_space::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
use parking_space::storage::{InMemoryRepository, SpaceService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Parking Space Lifecycle ===\n");

    let service = SpaceService::new(InMemoryRepository::new());
    let space = service.register("Level 2 / 044")?;
    let Some(id) = space.id() else {
        return Err("repository did not assign an id".into());
    };
    println!("Registered '{}' as {} ({})", space.name(), id, space.status());

    let plan = [
        SpaceOperation::Occupy,
        SpaceOperation::RemoveFromService,
        SpaceOperation::Vacate,
        SpaceOperation::RemoveFromService,
        SpaceOperation::Occupy,
        SpaceOperation::PutIntoService,
    ];

    for op in plan {
        let txn = ParkingSpaceTransaction::new(format!("requested {op}"));
        match service.execute_and_record(id, op, txn) {
            Ok(status) => println!("  {op:<20} -> {status}"),
            Err(err) => println!("  {op:<20} rejected: {err}"),
        }
    }

    println!("\nOperator forces the space offline:");
    service.override_status(id, SpaceStatus::OutOfService)?;
    println!("  status is now {}", service.get(id)?.status());

    let stored = service.get(id)?;
    println!("\nHistory ({} entries):", stored.transactions().len());
    for txn in stored.transactions() {
        println!("  {} {}", txn.recorded_at.format("%H:%M:%S%.3f"), txn.details);
    }

    let checkpoint = SpaceCheckpoint::capture(&stored)?;
    let json = checkpoint.encode(CheckpointFormat::Json)?;
    let binary = checkpoint.encode(CheckpointFormat::Binary)?;
    println!(
        "\nCheckpoint {}: {} bytes as JSON, {} bytes as binary",
        checkpoint.id,
        json.len(),
        binary.len()
    );

    let restored = SpaceCheckpoint::decode(&binary, CheckpointFormat::Binary)?.restore()?;
    println!(
        "Restored '{}' in state {} with {} transactions",
        restored.name(),
        restored.status(),
        restored.transactions().len()
    );

    Ok(())
}
