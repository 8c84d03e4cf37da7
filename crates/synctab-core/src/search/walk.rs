// crates/synctab-core/src/search/walk.rs
//
// Random-walk fallback for spaces too large to enumerate. Each sample is N
// independent uniform draws (with replacement); nothing remembers previously
// seen tuples, so completion within the timeout is probabilistic.

use std::time::Instant;

use crate::cancel::{CancelPoll, CancelSignal};
use crate::config::config::SearchConfig;
use crate::search::state::{Mode, PassReport, PassStop, SearchState};
use crate::table::{offset_of, Table};

pub fn run<C: CancelPoll + ?Sized>(
    config: &SearchConfig,
    lines: usize,
    rng: &mut fastrand::Rng,
    cancel: &mut C,
) -> PassReport {
    let candidates = &config.candidates;
    let n = candidates.len();

    let mut table = Table::new(lines);
    let mut state = SearchState::new(lines, Mode::RandomWalk);
    let mut assignment = vec![0u32; lines];
    let mut evaluated = 0u64;

    let start = Instant::now();

    let stop = loop {
        if state.missing == 0 {
            break PassStop::Filled;
        }
        if start.elapsed() >= config.walk_timeout {
            break PassStop::TimedOut;
        }
        match cancel.poll() {
            CancelSignal::None => {}
            CancelSignal::SkipPass => break PassStop::Skipped,
            CancelSignal::Abort => break PassStop::Aborted,
        }

        let mut sum = 0u64;
        for slot in assignment.iter_mut() {
            let v = candidates[rng.usize(..n)];
            *slot = v;
            sum += u64::from(v);
        }
        evaluated += 1;

        if let Some(bucket) = state.consider(&mut table, config.static_window, &assignment, sum) {
            log::info!(
                "position {} found, {} combos missing",
                offset_of(bucket),
                state.missing
            );
        }
    };

    PassReport {
        table,
        state,
        stop,
        evaluated,
    }
}
