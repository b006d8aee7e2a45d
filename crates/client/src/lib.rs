//! agendo_client - CLI client for the agendo scheduling API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod report;
pub mod view;

pub use client::AgendoClient;
pub use error::{ClientError, Result};
