// crates/synctab-core/tests/engine_runs.rs

use synctab_core::cancel::NeverCancel;
use synctab_core::config::defaults::{config_for, preset};
use synctab_core::report::render_summary;
use synctab_core::search::vertical::VerticalScroll;
use synctab_core::{Engine, Termination};

#[test]
fn max12_run_escalates_to_four_lines() {
    let cfg = config_for(preset("max12").unwrap().candidates);
    let out = Engine::new(cfg, NeverCancel).unwrap().run();

    assert_eq!(out.termination, Termination::Complete);
    assert_eq!(out.lines, 4);
    assert_eq!(out.passes, 4);
    assert_eq!(out.missing, 0);
    assert_eq!(out.table.lines(), 4);
    // 12 + 144 + 1728 full passes, then the early-terminated fourth
    assert_eq!(out.evaluated, 12 + 144 + 1728 + 9426);
    assert!(out.is_usable());
    assert_eq!(render_summary(&out), "4 lines needed for the sync scroll");
}

#[test]
fn line_cap_stops_an_incomplete_run() {
    let mut cfg = config_for(&[160, 204, 230]);
    cfg.max_lines = Some(3);
    let out = Engine::new(cfg, NeverCancel).unwrap().run();

    assert_eq!(out.termination, Termination::LineCapReached);
    assert_eq!(out.lines, 3);
    assert_eq!(out.missing, 118);
    assert!(!out.is_usable());
    assert_eq!(render_summary(&out), "118 combos missing");
}

#[test]
fn vertical_subset_ends_run_on_incomplete_table() {
    // multiples of 32 only ever reach buckets 0, 16, ..., 112
    let mut cfg = config_for(&[0, 32]);
    cfg.vertical_scan = true;
    cfg.max_lines = Some(20);
    let out = Engine::new(cfg, NeverCancel).unwrap().run();

    assert_eq!(
        out.termination,
        Termination::VerticalFound(VerticalScroll {
            residue: 0,
            offset: 0
        })
    );
    assert_eq!(out.lines, 7);
    assert_eq!(out.missing, 120);
    assert!(out.is_usable());
}

#[test]
fn without_vertical_scan_the_same_run_hits_the_cap() {
    let mut cfg = config_for(&[0, 32]);
    cfg.max_lines = Some(9);
    let out = Engine::new(cfg, NeverCancel).unwrap().run();
    assert_eq!(out.termination, Termination::LineCapReached);
    assert_eq!(out.lines, 9);
}

#[test]
fn each_pass_starts_from_an_empty_table() {
    let cfg = config_for(&[160, 204, 230]);
    let mut engine = Engine::new(cfg, NeverCancel).unwrap();
    let one = engine.run_pass(1);
    let two = engine.run_pass(2);

    assert_eq!(one.table.filled(), 3);
    assert_eq!(two.table.lines(), 2);
    // no one-line assignment survives into the two-line table
    assert!(two.table.iter().all(|(_, s)| s.map_or(true, |a| a.len() == 2)));
}
