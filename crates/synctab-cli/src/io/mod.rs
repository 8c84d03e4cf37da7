// crates/synctab-cli/src/io/mod.rs

pub mod keys;
pub mod logging;
pub mod table_file;
