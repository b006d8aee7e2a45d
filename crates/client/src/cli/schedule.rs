//! Schedule CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

// Re-export core FilterMode for API usage
pub use agendo_core::agenda::FilterMode as CoreFilterMode;

/// Appointment management commands.
#[derive(Debug, Parser)]
pub struct ScheduleCommand {
    #[command(subcommand)]
    pub action: ScheduleAction,
}

/// CLI filter mode (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Mode {
    Day,
    CurrentWeek,
    NextWeek,
    #[default]
    All,
}

impl From<Mode> for CoreFilterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Day => CoreFilterMode::Day,
            Mode::CurrentWeek => CoreFilterMode::CurrentWeek,
            Mode::NextWeek => CoreFilterMode::NextWeek,
            Mode::All => CoreFilterMode::All,
        }
    }
}

/// Available schedule actions.
#[derive(Debug, Subcommand)]
pub enum ScheduleAction {
    /// List appointments in a time window.
    List {
        /// Time window to display.
        #[arg(long, value_enum, default_value = "all")]
        mode: Mode,
        /// Reference date (YYYY-MM-DD) for the day window.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Cancel an appointment.
    Cancel {
        /// Scheduling record ID.
        id: String,
        /// Linked calendar event ID, deleted first.
        #[arg(long)]
        event_id: String,
    },
}
