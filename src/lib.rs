//! Parking space: occupancy lifecycle for a single parking space
//!
//! A space is always VACANT, OCCUPIED or OUT_OF_SERVICE. Status changes go
//! through guarded transitions that refuse to run from the wrong state, and
//! every space keeps an append-only history of opaque transaction records.
//!
//! # Layout
//!
//! - **core**: status set, transition table, transaction history (pure)
//! - **space**: the `ParkingSpace` controller and its thread-safe handle
//! - **storage**: repository boundary, restoration checks, service facade
//! - **checkpoint**: versioned JSON/binary snapshots
//!
//! # Example
//!
//! ```rust
//! use parking_space::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
//! use parking_space::storage::{InMemoryRepository, SpaceService};
//!
//! let service = SpaceService::new(InMemoryRepository::new());
//! let space = service.register("A-12").unwrap();
//! let id = space.id().unwrap();
//!
//! service
//!     .execute_and_record(id, SpaceOperation::Occupy, ParkingSpaceTransaction::new("arrival"))
//!     .unwrap();
//!
//! // Occupied spaces must be vacated before going offline.
//! assert!(service.execute(id, SpaceOperation::RemoveFromService).is_err());
//! assert_eq!(service.get(id).unwrap().status(), SpaceStatus::Occupied);
//! ```

pub mod checkpoint;
pub mod core;
pub mod space;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{ParkingSpaceTransaction, SpaceOperation, SpaceStatus};
pub use crate::space::{ParkingSpace, SharedParkingSpace, TransitionError};
pub use crate::storage::{SpaceId, SpaceRepository};
