// crates/synctab-core/src/config/defaults.rs

use std::time::Duration;

use crate::config::config::SearchConfig;

/// 128M combinations is a comfortable exhaustive pass on a laptop.
pub const DEFAULT_MAX_BRUTE_FORCE: u64 = 128 * 1024 * 1024;

pub const DEFAULT_WALK_TIMEOUT: Duration = Duration::from_secs(240);

pub const DEFAULT_PRESET: &str = "max12";

/// A named set of line lengths known to be usable on real hardware.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub about: &'static str,
    pub candidates: &'static [u32],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "enchanted-land",
        about: "160/204/230 only, up to 20 lines",
        candidates: &[160, 204, 230],
    },
    Preset {
        name: "sowatt",
        about: "four lengths, 17 lines",
        candidates: &[160, 186, 204, 230],
    },
    Preset {
        name: "pre2006",
        about: "nine lengths, 5 lines",
        candidates: &[160, 230, 184, 204, 54, 80, 158, 186, 206],
    },
    Preset {
        name: "max12",
        about: "all twelve lengths, 4 lines",
        candidates: &[160, 162, 230, 184, 204, 0, 54, 56, 80, 158, 186, 206],
    },
    Preset {
        name: "no-mono",
        about: "no mono switches, rasters stay usable, 8 lines",
        candidates: &[160, 162, 204, 0, 158, 206],
    },
    Preset {
        name: "no-wakestate",
        about: "no wakestate handling needed, 19 lines",
        candidates: &[160, 204, 158],
    },
];

/// Case-insensitive preset lookup; `_` and `-` are interchangeable.
pub fn preset(name: &str) -> Option<&'static Preset> {
    let want = name.trim().to_ascii_lowercase().replace('_', "-");
    PRESETS.iter().find(|p| p.name == want)
}

pub fn config_for(candidates: &[u32]) -> SearchConfig {
    SearchConfig {
        candidates: candidates.to_vec(),
        max_brute_force: DEFAULT_MAX_BRUTE_FORCE,
        walk_timeout: DEFAULT_WALK_TIMEOUT,
        vertical_scan: false,
        static_window: None,
        force_walk: false,
        max_lines: None,
        seed: None,
    }
}

pub fn default_config() -> SearchConfig {
    let candidates = preset(DEFAULT_PRESET)
        .map(|p| p.candidates)
        .unwrap_or(&[160, 204, 230]);
    config_for(candidates)
}
