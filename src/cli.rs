use std::path::PathBuf;

use clap::Parser;

/// Terminal inventory tracker with a live remote store.
#[derive(Debug, Parser)]
#[command(name = "stockpile", version, about)]
pub struct Args {
    /// Config file path (default: platform config dir).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use the in-process store seeded with sample items.
    #[arg(long)]
    pub memory: bool,

    /// Use the embedded single-table database at this path.
    #[arg(long, value_name = "PATH")]
    pub legacy_db: Option<PathBuf>,

    /// Log filter, e.g. "info" or "stockpile=debug".
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
