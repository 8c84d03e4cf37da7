// crates/synctab-core/tests/config_validation.rs

use std::time::Duration;

use synctab_core::cancel::NeverCancel;
use synctab_core::config::config::StaticWindow;
use synctab_core::config::defaults::{config_for, default_config, preset, PRESETS};
use synctab_core::error::SyncError;
use synctab_core::validate::validate_config;
use synctab_core::Engine;

fn rejected(cfg: synctab_core::SearchConfig, needle: &str) {
    match Engine::new(cfg, NeverCancel) {
        Err(SyncError::Config(msg)) => assert!(msg.contains(needle), "{msg}"),
        Err(e) => panic!("unexpected error kind: {e}"),
        Ok(_) => panic!("config accepted, expected rejection containing {needle:?}"),
    }
}

#[test]
fn defaults_and_presets_are_valid() {
    validate_config(&default_config()).unwrap();
    for p in PRESETS {
        validate_config(&config_for(p.candidates)).unwrap_or_else(|e| panic!("{}: {e}", p.name));
    }
}

#[test]
fn preset_lookup_is_forgiving() {
    assert_eq!(preset("SoWatt").unwrap().candidates, &[160, 186, 204, 230]);
    assert_eq!(preset("enchanted_land").unwrap().candidates, &[160, 204, 230]);
    assert!(preset("nope").is_none());
}

#[test]
fn empty_candidates_rejected() {
    rejected(config_for(&[]), "empty");
}

#[test]
fn duplicate_candidates_rejected() {
    rejected(config_for(&[160, 204, 160]), "duplicate");
}

#[test]
fn unaligned_static_window_rejected() {
    let mut cfg = config_for(&[160, 204]);
    cfg.static_window = Some(StaticWindow::new(300));
    rejected(cfg, "multiple of 256");

    let mut ok = config_for(&[160, 204]);
    ok.static_window = Some(StaticWindow::new(768));
    validate_config(&ok).unwrap();
}

#[test]
fn zero_timeout_rejected() {
    let mut cfg = config_for(&[160, 204]);
    cfg.walk_timeout = Duration::ZERO;
    rejected(cfg, "walk_timeout");
}

#[test]
fn zero_brute_force_limit_rejected() {
    let mut cfg = config_for(&[160, 204]);
    cfg.max_brute_force = 0;
    rejected(cfg, "max_brute_force");
}

#[test]
fn zero_line_cap_rejected() {
    let mut cfg = config_for(&[160, 204]);
    cfg.max_lines = Some(0);
    rejected(cfg, "max_lines");
}

#[test]
fn too_many_candidates_rejected() {
    let many: Vec<u32> = (0..300).collect();
    rejected(config_for(&many), "at most 256");
}

#[test]
fn zero_length_line_is_a_valid_candidate() {
    validate_config(&config_for(&[0, 160])).unwrap();
}
