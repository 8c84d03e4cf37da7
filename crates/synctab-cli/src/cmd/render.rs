// crates/synctab-cli/src/cmd/render.rs

use clap::{Args, ValueEnum};
use synctab_core::report::{render_devpac, render_listing};
use synctab_core::Table;

use crate::io::table_file;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Offset, chosen lengths and their sum, one line per offset
    Listing,
    /// Devpac include: candidate indexes plus the 256-byte high part
    Devpac,
    /// Listing followed by the Devpac include
    Both,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Table path (.syt) written by `search --save`
    #[arg(long)]
    pub table: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    pub format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let saved = table_file::load_syt(&args.table)?;

    log::info!(
        "loaded {}: {} lines, {} candidates, {} of 128 offsets filled",
        args.table,
        saved.table.lines(),
        saved.candidates.len(),
        saved.table.filled()
    );

    let mut text = render_report(&saved.table, &saved.candidates, args.format);
    if saved.table.is_complete() {
        text.push_str(&format!("{} lines needed for the sync scroll\n", saved.table.lines()));
    } else {
        text.push_str(&format!("{} combos missing\n", saved.table.missing()));
    }
    emit(args.out.as_deref(), &text)
}

pub fn render_report(table: &Table, candidates: &[u32], format: ReportFormat) -> String {
    match format {
        ReportFormat::Listing => render_listing(table),
        ReportFormat::Devpac => render_devpac(table, candidates),
        ReportFormat::Both => {
            let mut s = render_listing(table);
            s.push_str(&render_devpac(table, candidates));
            s
        }
    }
}

/// stdout, or an atomic write to `out`.
pub fn emit(out: Option<&str>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            table_file::write_atomic(path, text.as_bytes())?;
            log::info!("wrote report to {path}");
        }
        None => print!("{text}"),
    }
    Ok(())
}
