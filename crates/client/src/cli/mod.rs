//! CLI command definitions.

pub mod health;
pub mod requests;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::{DEFAULT_BASE_URL, URL_ENV_VAR};

/// CLI client for the blackhole capture server.
#[derive(Debug, Parser)]
#[command(name = "blackhole-client")]
#[command(about = "CLI client for the blackhole capture server", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

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

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Captured requests.
    Requests(requests::RequestsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
