//! Guarded transitions between space states.
//!
//! Each operation has exactly one source state and one target state, defined
//! once in [`SpaceOperation::rule`]. [`TRANSITIONS`] and
//! [`SpaceOperation::resolve`] are both read from it.
//!
//! | Operation           | Source         | Target         |
//! |---------------------|----------------|----------------|
//! | `Occupy`            | VACANT         | OCCUPIED       |
//! | `Vacate`            | OCCUPIED       | VACANT         |
//! | `RemoveFromService` | VACANT         | OUT_OF_SERVICE |
//! | `PutIntoService`    | OUT_OF_SERVICE | VACANT         |
//!
//! OCCUPIED and OUT_OF_SERVICE are never adjacent: moving between them always
//! passes through VACANT.

use super::state::SpaceStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A requested change to a space's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceOperation {
    /// A vehicle takes a free space.
    Occupy,
    /// The vehicle leaves.
    Vacate,
    /// A free space is taken offline.
    RemoveFromService,
    /// An offline space comes back online.
    PutIntoService,
}

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRule {
    pub operation: SpaceOperation,
    pub source: SpaceStatus,
    pub target: SpaceStatus,
}

/// The complete transition table, one row per operation in `ALL` order.
pub const TRANSITIONS: [TransitionRule; 4] = [
    SpaceOperation::Occupy.rule(),
    SpaceOperation::Vacate.rule(),
    SpaceOperation::RemoveFromService.rule(),
    SpaceOperation::PutIntoService.rule(),
];

impl SpaceOperation {
    /// Every operation, in table order.
    pub const ALL: [SpaceOperation; 4] = [
        Self::Occupy,
        Self::Vacate,
        Self::RemoveFromService,
        Self::PutIntoService,
    ];

    /// Name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Occupy => "occupy",
            Self::Vacate => "vacate",
            Self::RemoveFromService => "remove_from_service",
            Self::PutIntoService => "put_into_service",
        }
    }

    /// The table row for this operation.
    pub const fn rule(&self) -> TransitionRule {
        let (source, target) = match self {
            Self::Occupy => (SpaceStatus::Vacant, SpaceStatus::Occupied),
            Self::Vacate => (SpaceStatus::Occupied, SpaceStatus::Vacant),
            Self::RemoveFromService => (SpaceStatus::Vacant, SpaceStatus::OutOfService),
            Self::PutIntoService => (SpaceStatus::OutOfService, SpaceStatus::Vacant),
        };
        TransitionRule {
            operation: *self,
            source,
            target,
        }
    }

    /// The only state this operation may be applied from.
    pub fn source(&self) -> SpaceStatus {
        self.rule().source
    }

    /// The state this operation always produces.
    pub fn target(&self) -> SpaceStatus {
        self.rule().target
    }

    /// Resolve the operation against `current` (pure).
    ///
    /// Returns the target state when `current` is the declared source, and
    /// `None` when the transition is not allowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parking_space::core::{SpaceOperation, SpaceStatus};
    ///
    /// assert_eq!(
    ///     SpaceOperation::Occupy.resolve(SpaceStatus::Vacant),
    ///     Some(SpaceStatus::Occupied)
    /// );
    /// assert_eq!(SpaceOperation::Occupy.resolve(SpaceStatus::OutOfService), None);
    /// ```
    pub fn resolve(&self, current: SpaceStatus) -> Option<SpaceStatus> {
        let rule = self.rule();
        (current == rule.source).then_some(rule.target)
    }

    /// Check whether the operation may run from `current` (pure).
    pub fn can_apply(&self, current: SpaceStatus) -> bool {
        self.resolve(current).is_some()
    }

    /// Operations that are legal from `status`, in table order.
    pub fn available_from(status: SpaceStatus) -> Vec<SpaceOperation> {
        Self::ALL
            .into_iter()
            .filter(|op| op.can_apply(status))
            .collect()
    }
}

impl fmt::Display for SpaceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
