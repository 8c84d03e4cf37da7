// crates/synctab-core/src/config/config.rs

use std::time::Duration;

use crate::search::state::Mode;

/// Width of the video-memory window a static offset pins sums into.
pub const WINDOW_BYTES: u64 = 256;

/// A single 256-byte video-memory window. Sums outside it never fill a bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticWindow {
    /// Inclusive start of the window; a multiple of 256.
    pub offset: u64,
}

impl StaticWindow {
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }

    #[inline]
    pub fn contains(&self, sum: u64) -> bool {
        sum >= self.offset && sum < self.offset.saturating_add(WINDOW_BYTES)
    }
}

/// Immutable per-run search parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Candidate line lengths in bytes. Order defines the index used by the assembly table.
    pub candidates: Vec<u32>,

    /// Largest C^N still enumerated exhaustively.
    pub max_brute_force: u64,

    /// Wall-clock budget for one random-walk pass.
    pub walk_timeout: Duration,

    /// Accept an incomplete table once a stride-16 residue class is fully filled.
    pub vertical_scan: bool,

    pub static_window: Option<StaticWindow>,

    /// Random-walk every pass, regardless of `max_brute_force`.
    pub force_walk: bool,

    /// Hard cap on the line count. `None` escalates until cancelled.
    pub max_lines: Option<usize>,

    /// Seed for the random walk. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Number of ordered tuples for `lines` positions, saturating at `u128::MAX`.
    pub fn space(&self, lines: usize) -> u128 {
        let exp = u32::try_from(lines).unwrap_or(u32::MAX);
        (self.candidates.len() as u128)
            .checked_pow(exp)
            .unwrap_or(u128::MAX)
    }

    pub fn mode_for(&self, lines: usize) -> Mode {
        if self.force_walk || self.space(lines) > u128::from(self.max_brute_force) {
            Mode::RandomWalk
        } else {
            Mode::Exhaustive
        }
    }
}
