// crates/synctab-cli/src/cmd/search.rs

use std::time::Duration;

use clap::Args;
use synctab_core::cancel::{CancelPoll, NeverCancel};
use synctab_core::config::config::StaticWindow;
use synctab_core::config::defaults::{self, DEFAULT_MAX_BRUTE_FORCE, DEFAULT_PRESET, PRESETS};
use synctab_core::report::render_summary;
use synctab_core::{Engine, SearchConfig, Termination};

use super::render::{emit, render_report, ReportFormat};
use crate::io::keys::{KeyCancel, RawModeGuard};
use crate::io::table_file;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Built-in candidate set (see `presets`)
    #[arg(long, default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// Comma-separated line lengths in bytes (e.g. 160,204,230). Overrides --preset.
    #[arg(long)]
    pub candidates: Option<String>,

    /// Largest search space (C^N) enumerated exhaustively before switching to random walk
    #[arg(long, default_value_t = DEFAULT_MAX_BRUTE_FORCE)]
    pub max_brute_force: u64,

    /// Random-walk timeout per line count, in seconds
    #[arg(long, default_value_t = 240)]
    pub walk_timeout: u64,

    /// Random-walk every pass regardless of --max-brute-force
    #[arg(long, default_value_t = false)]
    pub force_walk: bool,

    /// Accept an incomplete table once a vertical-scroll subset (stride 32 bytes) is filled
    #[arg(long, default_value_t = false)]
    pub vertical: bool,

    /// Only accept sums inside [OFF, OFF+256). Multiple of 256.
    #[arg(long)]
    pub static_offset: Option<u64>,

    /// Stop escalating after this many lines (default: until complete or Esc)
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Random-walk seed (decimal or 0x... hex). Omit for an entropy seed.
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    pub format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Also save the finished table (.syt) for `render`
    #[arg(long)]
    pub save: Option<String>,

    /// Do not poll the terminal for Esc / skip keys
    #[arg(long, default_value_t = false)]
    pub no_keys: bool,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args)?;
    let candidates = cfg.candidates.clone();

    let outcome = {
        // dropped before the report prints so the terminal is cooked again
        let raw = if args.no_keys { None } else { RawModeGuard::enable() };
        let cancel: Box<dyn CancelPoll> = if raw.is_some() {
            log::info!("press any key to increase number of lines, Esc to stop searching");
            Box::new(KeyCancel)
        } else {
            Box::new(NeverCancel)
        };
        let mut engine = Engine::new(cfg, cancel)?;
        engine.run()
    };

    match outcome.termination {
        Termination::Complete => log::info!("complete table at {} lines", outcome.lines),
        Termination::VerticalFound(v) => log::info!(
            "vertical scroll subset at {} lines, residue {} offset {}",
            outcome.lines,
            v.residue,
            v.offset
        ),
        Termination::Cancelled => log::warn!("search cancelled at {} lines", outcome.lines),
        Termination::LineCapReached => log::warn!("line cap reached at {} lines", outcome.lines),
    }
    log::debug!(
        "passes={} evaluated={} missing={}",
        outcome.passes,
        outcome.evaluated,
        outcome.missing
    );

    let mut text = render_report(&outcome.table, &candidates, args.format);
    text.push_str(&render_summary(&outcome));
    text.push('\n');
    emit(args.out.as_deref(), &text)?;

    if let Some(path) = &args.save {
        table_file::save_syt(path, &outcome.table, &candidates)?;
        log::info!("saved table to {path}");
    }
    Ok(())
}

fn build_config(a: &SearchArgs) -> anyhow::Result<SearchConfig> {
    let mut cfg = match &a.candidates {
        Some(list) => defaults::config_for(&parse_lengths(list)?),
        None => match defaults::preset(&a.preset) {
            Some(p) => defaults::config_for(p.candidates),
            None => {
                let names = PRESETS.iter().map(|p| p.name).collect::<Vec<_>>().join(", ");
                anyhow::bail!("unknown preset {:?} (known: {names})", a.preset);
            }
        },
    };

    cfg.max_brute_force = a.max_brute_force;
    cfg.walk_timeout = Duration::from_secs(a.walk_timeout);
    cfg.force_walk = a.force_walk;
    cfg.vertical_scan = a.vertical;
    cfg.static_window = a.static_offset.map(StaticWindow::new);
    cfg.max_lines = a.max_lines;
    cfg.seed = a.seed.as_deref().map(parse_u64_any).transpose()?;
    Ok(cfg)
}

fn parse_lengths(s: &str) -> anyhow::Result<Vec<u32>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        out.push(t.parse::<u32>().map_err(|e| anyhow::anyhow!("bad line length {t:?}: {e}"))?);
    }
    Ok(out)
}

fn parse_u64_any(s: &str) -> anyhow::Result<u64> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(t.parse::<u64>()?)
    }
}
