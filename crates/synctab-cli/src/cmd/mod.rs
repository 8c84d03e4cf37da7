// crates/synctab-cli/src/cmd/mod.rs

pub mod presets;
pub mod render;
pub mod search;
