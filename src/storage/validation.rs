//! Restoration checks for persisted space records.
//!
//! Checks use Stillwater's `Validation` so a bad record reports every
//! problem at once instead of the first one found. Only the space's own
//! fields are checked; transaction content is opaque and never inspected.

use super::error::{RecordViolation, StorageError};
use super::SpaceRecord;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<RecordViolation>>;

fn check_name(record: &SpaceRecord) -> Check {
    if record.name.trim().is_empty() {
        Validation::fail(RecordViolation::EmptyName)
    } else {
        Validation::success(())
    }
}

fn check_id(record: &SpaceRecord) -> Check {
    if record.id.get() == 0 {
        Validation::fail(RecordViolation::ReservedId)
    } else {
        Validation::success(())
    }
}

/// Run every check against `record`, accumulating all violations.
pub fn check_record(record: &SpaceRecord) -> Validation<(), NonEmptyVec<RecordViolation>> {
    let checks = vec![check_name(record), check_id(record)];

    Validation::all_vec(checks).map(|_| ())
}

/// [`check_record`] folded into a `Result` for use with `?`.
pub fn validate_record(record: &SpaceRecord) -> Result<(), StorageError> {
    match check_record(record) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(StorageError::InvalidRecord(
            violations.iter().cloned().collect(),
        )),
    }
}
