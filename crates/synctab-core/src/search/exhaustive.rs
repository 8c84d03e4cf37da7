// crates/synctab-core/src/search/exhaustive.rs
//
// Deterministic enumeration of every ordered N-tuple over the candidate set.
// Positions count like an odometer: bump the rightmost digit, carry left on
// overflow, stop when the carry falls off the leftmost digit. Tuple k in
// visiting order is k written in base C, most significant digit first.

use crate::cancel::{CancelPoll, CancelSignal};
use crate::config::config::SearchConfig;
use crate::search::state::{Mode, PassReport, PassStop, SearchState};
use crate::table::{offset_of, Table};

#[derive(Clone, Debug)]
pub struct Odometer {
    radix: usize,
    digits: Vec<usize>,
}

impl Odometer {
    /// Starts at the all-zero tuple.
    pub fn new(radix: usize, positions: usize) -> Self {
        Self {
            radix,
            digits: vec![0; positions],
        }
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Move to the next tuple. Returns false once every tuple has been visited.
    pub fn advance(&mut self) -> bool {
        let mut k = self.digits.len();
        while k > 0 {
            k -= 1;
            self.digits[k] += 1;
            if self.digits[k] < self.radix {
                return true;
            }
            self.digits[k] = 0;
        }
        false
    }
}

/// Digits of `index` in base `radix`, most significant first.
pub fn mixed_radix_digits(mut index: u128, radix: usize, positions: usize) -> Vec<usize> {
    let r = radix as u128;
    let mut out = vec![0usize; positions];
    for d in out.iter_mut().rev() {
        *d = (index % r) as usize;
        index /= r;
    }
    out
}

pub fn run<C: CancelPoll + ?Sized>(config: &SearchConfig, lines: usize, cancel: &mut C) -> PassReport {
    let candidates = &config.candidates;
    let space = config.space(lines);

    let mut table = Table::new(lines);
    let mut state = SearchState::new(lines, Mode::Exhaustive);
    let mut odo = Odometer::new(candidates.len(), lines);
    let mut assignment = vec![0u32; lines];
    let mut evaluated = 0u64;

    let stop = loop {
        if state.missing == 0 {
            break PassStop::Filled;
        }
        match cancel.poll() {
            CancelSignal::None => {}
            CancelSignal::SkipPass => break PassStop::Skipped,
            CancelSignal::Abort => break PassStop::Aborted,
        }

        let mut sum = 0u64;
        for (slot, &d) in assignment.iter_mut().zip(odo.digits()) {
            *slot = candidates[d];
            sum += u64::from(candidates[d]);
        }
        evaluated += 1;

        if let Some(bucket) = state.consider(&mut table, config.static_window, &assignment, sum) {
            log::info!(
                "position {} found, {} combos missing, {}% searched",
                offset_of(bucket),
                state.missing,
                percent(evaluated, space)
            );
        }

        if !odo.advance() {
            break if state.missing == 0 {
                PassStop::Filled
            } else {
                PassStop::Exhausted
            };
        }
    };

    PassReport {
        table,
        state,
        stop,
        evaluated,
    }
}

fn percent(done: u64, space: u128) -> u32 {
    if space == 0 {
        return 100;
    }
    ((done as f64 / space as f64) * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_floored() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn single_position_counts_through_radix() {
        let mut o = Odometer::new(3, 1);
        assert_eq!(o.digits(), &[0]);
        assert!(o.advance());
        assert!(o.advance());
        assert_eq!(o.digits(), &[2]);
        assert!(!o.advance());
        assert_eq!(o.digits(), &[0]);
    }
}
