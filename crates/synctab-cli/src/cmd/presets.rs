// crates/synctab-cli/src/cmd/presets.rs

use synctab_core::config::defaults::{DEFAULT_PRESET, PRESETS};

pub fn run() -> anyhow::Result<()> {
    for p in PRESETS {
        let lengths = p
            .candidates
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let mark = if p.name == DEFAULT_PRESET { " (default)" } else { "" };
        println!("{:<16}{}{}", p.name, lengths, mark);
        println!("{:<16}{}", "", p.about);
    }
    Ok(())
}
