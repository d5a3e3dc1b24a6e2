//! Snapshot differ — decides when a fetch cycle warrants an alert.

use crate::domain::{snapshot_of, Snapshot, TradeHalt};

/// Compares each fetch against the previously observed halts.
///
/// The differ only adds and updates: symbols that drop out of the feed stay
/// in the retained state, so a halt that resolves and vanishes is never
/// flagged as such. Pruning is a possible future enhancement.
#[derive(Debug, Default)]
pub struct SnapshotDiffer {
    prior: Snapshot,
}

impl SnapshotDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one fetch into the retained state.
    ///
    /// Returns true when the cycle contains a halt not seen before, or an
    /// already-known halt whose resume time changed (including
    /// absent-to-present transitions). Changes to any other field do not
    /// alert.
    pub fn observe(&mut self, current: &[TradeHalt]) -> bool {
        let mut alert = false;

        for (symbol, halt) in snapshot_of(current) {
            let changed = match self.prior.get(&symbol) {
                // New halt
                None => true,
                // Resume time updated, or unchanged
                Some(prior) => prior.resume_time != halt.resume_time,
            };
            if changed {
                self.prior.insert(symbol, halt);
                alert = true;
            }
        }

        alert
    }

    /// The retained prior-snapshot state.
    pub fn prior(&self) -> &Snapshot {
        &self.prior
    }
}
