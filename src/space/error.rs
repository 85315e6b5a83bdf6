//! Errors raised by guarded transitions.

use crate::core::{SpaceOperation, SpaceStatus};
use thiserror::Error;

/// Errors that can occur when applying a transition to a space
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The space was not in the operation's source state. Its status is
    /// unchanged.
    #[error("Invalid transition '{operation}': requires {required}, space is {actual}")]
    InvalidTransition {
        operation: SpaceOperation,
        required: SpaceStatus,
        actual: SpaceStatus,
    },
}

impl TransitionError {
    /// The operation that was refused.
    pub fn operation(&self) -> SpaceOperation {
        match self {
            Self::InvalidTransition { operation, .. } => *operation,
        }
    }

    /// The status the space had when the operation was refused.
    pub fn actual(&self) -> SpaceStatus {
        match self {
            Self::InvalidTransition { actual, .. } => *actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_states() {
        let err = TransitionError::InvalidTransition {
            operation: SpaceOperation::Occupy,
            required: SpaceStatus::Vacant,
            actual: SpaceStatus::Occupied,
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition 'occupy': requires VACANT, space is OCCUPIED"
        );
        assert_eq!(err.operation(), SpaceOperation::Occupy);
        assert_eq!(err.actual(), SpaceStatus::Occupied);
    }
}
