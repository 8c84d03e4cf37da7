// crates/synctab-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "synctab")]
#[command(about = "Sync scroll line-length table search", long_about = None)]
pub struct Cli {
    /// Log level: error | warn | info | debug | trace
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a complete offset table, escalating the line count
    Search(cmd::search::SearchArgs),

    /// Render a saved table (.syt) as a listing and/or Devpac include
    Render(cmd::render::RenderArgs),

    /// List built-in candidate line-length sets
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    io::logging::init(&cli.log_level);

    match cli.cmd {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Render(args) => cmd::render::run(args),
        Commands::Presets => cmd::presets::run(),
    }
}
