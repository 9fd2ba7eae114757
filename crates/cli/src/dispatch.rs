//! Command dispatch.
//!
//! Routes a parsed [`Cli`] to its command module.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands::{self, Output};
use crate::config_context::ConfigCommandContext;

pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel: &CancellationToken,
) -> Result<()> {
    let output = Output::new(cli.output, cli.output_file);

    match cli.command {
        Commands::Completions { shell } => commands::completions::run(shell),
        Commands::Test => commands::test_connection::run(config.into_real_config()?, cancel).await,
        Commands::Alerts { command } => {
            commands::alerts::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::Users { command } => {
            commands::users::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::Annotations { command } => {
            commands::annotations::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::Teams { command } => {
            commands::teams::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::Orgs { command } => {
            commands::orgs::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::Dashboards { command } => {
            commands::dashboards::run(config.into_real_config()?, command, &output, cancel).await
        }
        Commands::FetchIncidents(_) => {
            commands::fetch_incidents::run(config.into_real_config()?, &output, cancel).await
        }
    }
}
