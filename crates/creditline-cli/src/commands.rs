//! CLI command definitions.

use crate::config::OutputFormat;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Issue a credit or refund to a project owner
    Issue {
        /// Email of the project's owner
        #[arg(long)]
        email: String,

        /// Owner ID
        #[arg(long)]
        owner_id: String,

        /// Project ID
        #[arg(long)]
        project_id: String,

        /// Amount in US dollars, e.g. 10.5 or 100
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },
}
