// crates/synctab-cli/src/io/table_file.rs

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use synctab_core::table::format::{self as table_format, SavedTable};
use synctab_core::Table;

/// Load and verify a .syt table file.
pub fn load_syt(path: &str) -> Result<SavedTable> {
    let bytes = std::fs::read(path).with_context(|| format!("read table {path}"))?;
    let saved = table_format::decode(&bytes).with_context(|| format!("decode table {path}"))?;
    Ok(saved)
}

pub fn save_syt(path: &str, table: &Table, candidates: &[u32]) -> Result<()> {
    let bytes = table_format::encode(table, candidates).with_context(|| format!("encode table {path}"))?;
    write_atomic(path, &bytes)
}

/// Write via a temp file in the target directory, then rename over `path`.
pub fn write_atomic(path: &str, bytes: &[u8]) -> Result<()> {
    let dir = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).with_context(|| format!("create temp file for {path}"))?;
    tmp.write_all(bytes).with_context(|| format!("write {path}"))?;
    tmp.persist(path).with_context(|| format!("persist {path}"))?;
    Ok(())
}
