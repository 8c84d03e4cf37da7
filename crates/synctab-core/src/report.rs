// crates/synctab-core/src/report.rs
//
// Text renderings of a finished table: a plain listing for humans and a Devpac
// include where each length becomes its index into the line-routine table.

use std::fmt::Write;

use crate::search::engine::{SearchOutcome, Termination};
use crate::table::{assignment_sum, offset_of, Table};

/// `"{offset}: v1 v2 ... Total: {sum}"` per bucket, `"{offset}: no line"` when empty.
pub fn render_listing(table: &Table) -> String {
    let mut s = String::new();
    for (bucket, slot) in table.iter() {
        let off = offset_of(bucket);
        match slot {
            None => {
                let _ = writeln!(s, "{off}: no line");
            }
            Some(a) => {
                let _ = write!(s, "{off}:");
                for v in a {
                    let _ = write!(s, " {v}");
                }
                let _ = writeln!(s, " Total: {}", assignment_sum(a));
            }
        }
    }
    s
}

pub fn render_devpac(table: &Table, candidates: &[u32]) -> String {
    let mut s = String::new();

    let rule = "*********************************************";
    let used = format!("*  {} line lengths used", candidates.len());
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "{:<44}*", "*  Sync scroll table creator");
    let _ = writeln!(s, "{used:<44}*");
    let _ = writeln!(s, "{rule}");

    let _ = writeln!(
        s,
        "* Columns as indexes into line-rout table. Last value is 256 byte offset"
    );
    let routs = candidates
        .iter()
        .map(|c| format!("_s{c}"))
        .collect::<Vec<_>>()
        .join(",");
    let _ = writeln!(s, "_linsrc\tdc.l {routs}");
    let _ = writeln!(s, "_synctab");

    for (bucket, slot) in table.iter() {
        let off = offset_of(bucket);
        match slot {
            None => {
                // N index columns plus the high byte, all zero
                let zeros = vec!["0"; table.lines() + 1].join(",");
                let _ = writeln!(s, "\tdc.b {zeros}\t\t* {off} not found");
            }
            Some(a) => {
                let mut row = String::new();
                for &len in a {
                    // Table::try_fill only accepts lengths drawn from `candidates`.
                    let idx = candidates.iter().position(|&c| c == len).unwrap_or(0);
                    let _ = write!(row, "{idx},");
                }
                let sum = assignment_sum(a);
                let _ = writeln!(s, "\tdc.b {row}{}\t\t* {off} ({sum})", sum / 256);
            }
        }
    }
    s
}

pub fn render_summary(outcome: &SearchOutcome) -> String {
    match outcome.termination {
        Termination::Complete | Termination::VerticalFound(_) => {
            format!("{} lines needed for the sync scroll", outcome.lines)
        }
        Termination::Cancelled | Termination::LineCapReached => {
            format!("{} combos missing", outcome.missing)
        }
    }
}
