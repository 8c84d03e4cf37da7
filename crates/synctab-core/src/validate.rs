use std::collections::HashSet;

use crate::config::config::{SearchConfig, WINDOW_BYTES};
use crate::error::{Result, SyncError};

/// Candidate indexes are emitted as `dc.b` bytes, so the set must fit one.
pub const MAX_CANDIDATES: usize = 256;

pub fn validate_config(c: &SearchConfig) -> Result<()> {
    if c.candidates.is_empty() {
        return Err(SyncError::Config("candidates must not be empty".into()));
    }
    if c.candidates.len() > MAX_CANDIDATES {
        return Err(SyncError::Config(format!(
            "at most {MAX_CANDIDATES} candidates supported, got {}",
            c.candidates.len()
        )));
    }

    // Assembly output maps lengths back to indexes; duplicates would be ambiguous.
    let mut seen = HashSet::with_capacity(c.candidates.len());
    for &len in &c.candidates {
        if !seen.insert(len) {
            return Err(SyncError::Config(format!("duplicate candidate line length {len}")));
        }
    }

    if c.max_brute_force == 0 {
        return Err(SyncError::Config("max_brute_force must be non-zero".into()));
    }
    if c.walk_timeout.is_zero() {
        return Err(SyncError::Config("walk_timeout must be positive".into()));
    }

    if let Some(w) = c.static_window {
        if w.offset % WINDOW_BYTES != 0 {
            return Err(SyncError::Config(format!(
                "static window offset {} is not a multiple of {WINDOW_BYTES}",
                w.offset
            )));
        }
    }

    if c.max_lines == Some(0) {
        return Err(SyncError::Config("max_lines must be at least 1".into()));
    }

    Ok(())
}
