//! Transaction history of a parking space.
//!
//! The history is an append-only, insertion-ordered list of transaction
//! records. Records are opaque here: nothing in this crate's core reads
//! their content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single history entry for a parking space.
///
/// Content is supplied by whoever records it (payment system, operator
/// console, sensor gateway) and is carried through untouched.
///
/// # Example
///
/// ```rust
/// use parking_space::core::ParkingSpaceTransaction;
///
/// let txn = ParkingSpaceTransaction::new("ticket 4411 issued");
/// assert_eq!(txn.details, "ticket 4411 issued");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpaceTransaction {
    /// Unique id of this record
    pub id: Uuid,
    /// When the record was created
    pub recorded_at: DateTime<Utc>,
    /// Free-form content owned by the recording party
    pub details: String,
}

impl ParkingSpaceTransaction {
    /// Create a record stamped with a fresh id and the current time.
    pub fn new(details: impl Into<String>) -> Self {
        Self::at(Utc::now(), details)
    }

    /// Create a record with an explicit timestamp.
    pub fn at(recorded_at: DateTime<Utc>, details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            details: details.into(),
        }
    }
}

/// Ordered, append-only sequence of transactions.
///
/// There is no operation that removes, replaces or reorders an entry.
/// Readers get a slice; growth only happens through [`append`](Self::append).
///
/// # Example
///
/// ```rust
/// use parking_space::core::{ParkingSpaceTransaction, TransactionHistory};
///
/// let mut history = TransactionHistory::new();
/// history.append(ParkingSpaceTransaction::new("arrival"));
/// history.append(ParkingSpaceTransaction::new("departure"));
///
/// let details: Vec<_> = history.iter().map(|t| t.details.as_str()).collect();
/// assert_eq!(details, ["arrival", "departure"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHistory {
    entries: Vec<ParkingSpaceTransaction>,
}

impl TransactionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a record at the end.
    pub fn append(&mut self, transaction: ParkingSpaceTransaction) {
        self.entries.push(transaction);
    }

    /// All records in insertion order.
    pub fn as_slice(&self) -> &[ParkingSpaceTransaction] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParkingSpaceTransaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended record.
    pub fn last(&self) -> Option<&ParkingSpaceTransaction> {
        self.entries.last()
    }
}

impl From<Vec<ParkingSpaceTransaction>> for TransactionHistory {
    fn from(entries: Vec<ParkingSpaceTransaction>) -> Self {
        Self { entries }
    }
}

impl From<TransactionHistory> for Vec<ParkingSpaceTransaction> {
    fn from(history: TransactionHistory) -> Self {
        history.entries
    }
}

impl<'a> IntoIterator for &'a TransactionHistory {
    type Item = &'a ParkingSpaceTransaction;
    type IntoIter = std::slice::Iter<'a, ParkingSpaceTransaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = TransactionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn append_preserves_order() {
        let mut history = TransactionHistory::new();
        let first = ParkingSpaceTransaction::new("first");
        let second = ParkingSpaceTransaction::new("second");

        history.append(first.clone());
        history.append(second.clone());

        assert_eq!(history.as_slice(), &[first, second.clone()]);
        assert_eq!(history.last(), Some(&second));
    }

    #[test]
    fn new_transactions_get_distinct_ids() {
        let a = ParkingSpaceTransaction::new("same");
        let b = ParkingSpaceTransaction::new("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn history_serializes_as_plain_list() {
        let mut history = TransactionHistory::new();
        history.append(ParkingSpaceTransaction::new("entry"));

        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());

        let restored: TransactionHistory = serde_json::from_value(json).unwrap();
        assert_eq!(restored, history);
    }
}
