//! Append-only event log.
//!
//! Every state change a game makes is recorded as an `ActionRecord`. Records
//! are never edited or removed; the log only grows. Games choose the event
//! type `E`.
//!
//! Backed by an `im::Vector`, so cloning a log (for snapshots or replay
//! comparison) is O(1).
//!
//! ```
//! use athena_towers::core::ActionLog;
//!
//! let mut log = ActionLog::new();
//! log.push(1, "dealt");
//! log.push(1, "attacked");
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.last().unwrap().sequence, 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord<E> {
    /// Position in the log (0-based, gap-free).
    pub sequence: u32,

    /// Round in which the event happened.
    pub round: u32,

    pub event: E,
}

/// Append-only log of `ActionRecord`s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "E: Clone + Serialize",
    deserialize = "E: Clone + Deserialize<'de>"
))]
pub struct ActionLog<E: Clone> {
    records: Vector<ActionRecord<E>>,
}

impl<E: Clone> Default for ActionLog<E> {
    fn default() -> Self {
        Self {
            records: Vector::new(),
        }
    }
}

impl<E: Clone> ActionLog<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return its sequence number.
    pub fn push(&mut self, round: u32, event: E) -> u32 {
        let sequence = self.records.len() as u32;
        self.records.push_back(ActionRecord {
            sequence,
            round,
            event,
        });
        sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ActionRecord<E>> {
        self.records.back()
    }

    #[must_use]
    pub fn get(&self, sequence: usize) -> Option<&ActionRecord<E>> {
        self.records.get(sequence)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ActionRecord<E>> + '_ {
        self.records.iter()
    }

    /// Events of one round, in order.
    pub fn round(&self, round: u32) -> impl Iterator<Item = &E> + '_ {
        self.records
            .iter()
            .filter(move |r| r.round == round)
            .map(|r| &r.event)
    }
}
