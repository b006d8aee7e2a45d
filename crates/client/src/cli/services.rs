//! Service CLI commands.

use clap::{Parser, Subcommand};

/// Service catalog commands.
#[derive(Debug, Parser)]
pub struct ServicesCommand {
    #[command(subcommand)]
    pub action: ServicesAction,
}

/// Available service actions.
#[derive(Debug, Subcommand)]
pub enum ServicesAction {
    /// Get service by ID.
    Get {
        /// Service ID.
        id: String,
    },
}
