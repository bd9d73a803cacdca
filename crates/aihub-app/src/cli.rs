use std::path::PathBuf;

use aihub_common::LayoutMode;
use clap::Parser;

/// AI Hub: several AI chat services side by side in one window.
#[derive(Parser, Debug)]
#[command(name = "aihub", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `aihub=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Never open native service windows; use the system browser instead.
    #[arg(long)]
    pub browser_only: bool,

    /// Start in this layout (single, double, triple, quad).
    #[arg(long)]
    pub layout: Option<LayoutMode>,
}

pub fn parse() -> Args {
    Args::parse()
}
