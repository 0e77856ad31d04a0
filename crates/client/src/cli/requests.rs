//! Captured request CLI commands.

use clap::{Parser, Subcommand};

/// Captured request commands.
#[derive(Debug, Parser)]
pub struct RequestsCommand {
    #[command(subcommand)]
    pub action: RequestsAction,
}

/// Available request actions.
#[derive(Debug, Subcommand)]
pub enum RequestsAction {
    /// List every captured request, oldest first.
    List,
}
