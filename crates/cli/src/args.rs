//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Define the global connection and output flags.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge flags with the environment (see `main::build_config`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "grafana-cli")]
#[command(about = "Grafana CLI - Query and manage a Grafana server from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-cli test\n  grafana-cli alerts list --state alerting,pending\n  grafana-cli -o markdown teams search --query ops\n  grafana-cli fetch-incidents --first-fetch '12 hours' --max-fetch 20\n  grafana-cli -a $GRAFANA_API_TOKEN dashboards search --tag prod\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// API token or service account token (preferred over username/password)
    #[arg(short, long, global = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited or unavailable responses
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List, pause and inspect dashboard alerts
    Alerts {
        #[command(subcommand)]
        command: commands::alerts::AlertsCommand,
    },

    /// Search, inspect and update users
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Create annotations
    Annotations {
        #[command(subcommand)]
        command: commands::annotations::AnnotationsCommand,
    },

    /// Search and manage teams and their members
    Teams {
        #[command(subcommand)]
        command: commands::teams::TeamsCommand,
    },

    /// Create, list and look up organizations
    Orgs {
        #[command(subcommand)]
        command: commands::orgs::OrgsCommand,
    },

    /// Search dashboards and folders
    Dashboards {
        #[command(subcommand)]
        command: commands::dashboards::DashboardsCommand,
    },

    /// Run one incident fetch cycle and persist the new watermark
    FetchIncidents(commands::fetch_incidents::FetchIncidentsArgs),

    /// Check connectivity and credentials
    Test,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command talks to Grafana and so needs a complete configuration.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Completions { .. })
    }
}
