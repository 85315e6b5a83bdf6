//! Occupancy status of a parking space.
//!
//! A space is always in exactly one of three states. The status carries no
//! data of its own; what moves a space between states lives in
//! [`transition`](super::transition).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a parking space.
///
/// There is no terminal state: every status can be left and re-entered any
/// number of times.
///
/// # Example
///
/// ```rust
/// use parking_space::core::SpaceStatus;
///
/// let status = SpaceStatus::default();
/// assert_eq!(status, SpaceStatus::Vacant);
/// assert_eq!(status.name(), "VACANT");
/// assert!(status.is_available());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceStatus {
    /// Free and in service.
    #[default]
    Vacant,
    /// Taken by a vehicle.
    Occupied,
    /// Offline; cannot be occupied until put back into service.
    OutOfService,
}

impl SpaceStatus {
    /// Every status, in declaration order.
    pub const ALL: [SpaceStatus; 3] = [Self::Vacant, Self::Occupied, Self::OutOfService];

    /// Stable name used in logs, errors and persisted data.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vacant => "VACANT",
            Self::Occupied => "OCCUPIED",
            Self::OutOfService => "OUT_OF_SERVICE",
        }
    }

    /// True when a vehicle could park here right now.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Vacant)
    }
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
