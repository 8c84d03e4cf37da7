// crates/synctab-core/src/search/state.rs

use crate::config::config::StaticWindow;
use crate::table::{bucket_of, Table, BUCKETS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Exhaustive,
    RandomWalk,
}

/// Why a single "lines = N" pass stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStop {
    /// Every bucket filled.
    Filled,
    /// Enumeration visited every tuple with buckets still empty.
    Exhausted,
    /// Random walk ran out of wall-clock budget.
    TimedOut,
    /// Operator asked to move on to N+1.
    Skipped,
    /// Operator asked to end the run.
    Aborted,
}

/// Mutable state of one pass. Fresh per N.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub lines: usize,
    pub missing: usize,
    pub mode: Mode,
}

impl SearchState {
    pub fn new(lines: usize, mode: Mode) -> Self {
        Self {
            lines,
            missing: BUCKETS,
            mode,
        }
    }

    /// Offer one evaluated tuple to the table. Returns the bucket it filled, if any.
    ///
    /// Sums outside the static window are dropped before bucketing.
    pub fn consider(
        &mut self,
        table: &mut Table,
        window: Option<StaticWindow>,
        assignment: &[u32],
        sum: u64,
    ) -> Option<usize> {
        if let Some(w) = window {
            if !w.contains(sum) {
                return None;
            }
        }
        let bucket = bucket_of(sum);
        if table.try_fill(bucket, assignment) {
            self.missing -= 1;
            Some(bucket)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct PassReport {
    pub table: Table,
    pub state: SearchState,
    pub stop: PassStop,
    /// Tuples (or samples) evaluated before the pass stopped.
    pub evaluated: u64,
}
