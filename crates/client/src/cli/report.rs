//! Report CLI command.

use std::path::PathBuf;

use clap::Parser;

/// Printable report generation.
#[derive(Debug, Parser)]
pub struct ReportCommand {
    /// Write the HTML document here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
