// crates/synctab-core/src/search/engine.rs
//
// Escalation loop: N = 1, 2, 3, ... one pass per N, each pass on a fresh table.
// Nothing carries over between line counts.

use crate::cancel::CancelPoll;
use crate::config::config::SearchConfig;
use crate::error::Result;
use crate::search::state::{Mode, PassReport, PassStop};
use crate::search::vertical::{find_vertical, VerticalScroll};
use crate::search::{exhaustive, walk};
use crate::table::Table;
use crate::validate::validate_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every bucket filled.
    Complete,
    /// A stride-16 residue class is filled; the table may still have holes.
    VerticalFound(VerticalScroll),
    /// Operator aborted; the table is the one from the interrupted pass.
    Cancelled,
    /// `max_lines` reached without completing.
    LineCapReached,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub table: Table,
    pub lines: usize,
    pub termination: Termination,
    pub missing: usize,
    pub passes: usize,
    /// Tuples evaluated over all passes.
    pub evaluated: u64,
}

impl SearchOutcome {
    /// True when the table (or its vertical subset) is usable as-is.
    pub fn is_usable(&self) -> bool {
        matches!(
            self.termination,
            Termination::Complete | Termination::VerticalFound(_)
        )
    }
}

pub struct Engine<C: CancelPoll> {
    config: SearchConfig,
    cancel: C,
    rng: fastrand::Rng,
}

impl<C: CancelPoll> Engine<C> {
    /// Validates the configuration; no pass runs on a rejected config.
    pub fn new(config: SearchConfig, cancel: C) -> Result<Self> {
        validate_config(&config)?;

        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self { config, cancel, rng })
    }

    /// One pass at a fixed line count, strategy picked from the search space size.
    pub fn run_pass(&mut self, lines: usize) -> PassReport {
        let n = self.config.candidates.len();
        let mode = self.config.mode_for(lines);

        log::info!("calculating {lines} lines of {n} combinations");
        match mode {
            Mode::Exhaustive => {
                log::info!("total search space: {} calculations", self.config.space(lines));
            }
            Mode::RandomWalk if self.config.force_walk => {
                log::info!("random walk forced, timeout {:?}", self.config.walk_timeout);
            }
            Mode::RandomWalk => {
                log::info!(
                    "search space bigger than {}, switching to random walk",
                    self.config.max_brute_force
                );
            }
        }

        let report = match mode {
            Mode::Exhaustive => exhaustive::run(&self.config, lines, &mut self.cancel),
            Mode::RandomWalk => walk::run(&self.config, lines, &mut self.rng, &mut self.cancel),
        };

        log::debug!(
            "pass lines={} mode={:?} stop={:?} evaluated={} missing={}",
            lines,
            report.state.mode,
            report.stop,
            report.evaluated,
            report.state.missing
        );
        if report.state.missing > 0 {
            log::warn!(
                "{} lines: {} combos missing ({:?})",
                lines,
                report.state.missing,
                report.stop
            );
        }
        report
    }

    /// Escalate N until complete, a vertical subset turns up, the operator
    /// aborts, or `max_lines` is hit.
    pub fn run(&mut self) -> SearchOutcome {
        let mut lines = 0usize;
        let mut passes = 0usize;
        let mut evaluated = 0u64;

        loop {
            lines += 1;
            let report = self.run_pass(lines);
            passes += 1;
            evaluated += report.evaluated;

            if let Some(termination) = self.pass_termination(&report, lines) {
                return SearchOutcome {
                    missing: report.state.missing,
                    table: report.table,
                    lines,
                    termination,
                    passes,
                    evaluated,
                };
            }
        }
    }

    fn pass_termination(&self, report: &PassReport, lines: usize) -> Option<Termination> {
        if self.config.vertical_scan {
            if let Some(v) = find_vertical(&report.table) {
                log::info!("vertical scroll possible, offset: {}", v.offset);
                return Some(Termination::VerticalFound(v));
            }
        }
        if report.stop == PassStop::Aborted {
            log::info!("search aborted at {lines} lines");
            return Some(Termination::Cancelled);
        }
        if report.state.missing == 0 {
            return Some(Termination::Complete);
        }
        if self.config.max_lines.is_some_and(|cap| lines >= cap) {
            log::info!("line cap {lines} reached");
            return Some(Termination::LineCapReached);
        }
        None
    }
}
