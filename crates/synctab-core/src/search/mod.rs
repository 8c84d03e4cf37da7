// crates/synctab-core/src/search/mod.rs

pub mod engine;
pub mod exhaustive;
pub mod state;
pub mod vertical;
pub mod walk;
