//! Core parking space types.
//!
//! This module contains the pure parts of the lifecycle:
//! - The status set via `SpaceStatus`
//! - The transition table via `SpaceOperation`
//! - The append-only transaction history
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod state;
mod transition;

pub use history::{ParkingSpaceTransaction, TransactionHistory};
pub use state::SpaceStatus;
pub use transition::{SpaceOperation, TransitionRule, TRANSITIONS};
