//! Append-only store of uploaded snapshots.

use crate::{BudgetSnapshot, EngineError, ResultEngine};

/// Ordered history of every uploaded [`BudgetSnapshot`].
///
/// Entries are never updated, removed or reordered. Derivations only ever
/// read the last one.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    snapshots: Vec<BudgetSnapshot>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot and returns the new number of entries.
    pub fn append(&mut self, snapshot: BudgetSnapshot) -> usize {
        self.snapshots.push(snapshot);
        self.snapshots.len()
    }

    /// Returns the most recently appended snapshot.
    pub fn latest(&self) -> ResultEngine<&BudgetSnapshot> {
        self.snapshots.last().ok_or(EngineError::NoDataAvailable)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
