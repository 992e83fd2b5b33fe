//! Command-line argument parsing for the dashboard
//!
//! Supports:
//! - Loading a calendar fixture instead of the embedded demo data
//! - Theme override
//! - Opening the overlay immediately on startup

use clap::Parser;
use std::path::PathBuf;

/// A canvas-rendered sales dashboard
#[derive(Parser, Debug)]
#[command(name = "pulseboard", version, about = "A canvas-rendered sales dashboard")]
pub struct CliArgs {
    /// Calendar fixture (YAML) to load instead of the embedded demo data
    #[arg(value_name = "FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Theme id to use (overrides the configured theme)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Open the overlay immediately on startup
    #[arg(long)]
    pub open: bool,
}
