// crates/synctab-core/src/config/mod.rs

pub mod config;
pub mod defaults;
