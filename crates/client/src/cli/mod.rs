//! CLI command definitions.

pub mod report;
pub mod schedule;
pub mod services;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the agendo scheduling API.
#[derive(Debug, Parser)]
#[command(name = "agendo-client")]
#[command(about = "CLI client for the agendo scheduling API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "AGENDO_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Locale for the formatted date labels.
    #[arg(long, default_value = "pt-br")]
    pub locale: LocaleArg,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI locale selection (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LocaleArg {
    #[default]
    PtBr,
    En,
}

impl From<LocaleArg> for agendo_core::agenda::Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::PtBr => agendo_core::agenda::Locale::PtBr,
            LocaleArg::En => agendo_core::agenda::Locale::En,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Appointment listing and cancellation.
    Schedule(schedule::ScheduleCommand),
    /// Service catalog lookups.
    Services(services::ServicesCommand),
    /// Printable yearly report.
    Report(report::ReportCommand),
}
