//! Dashboards command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::DashboardSearchParams;
use grafana_config::Config;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum DashboardsCommand {
    /// Search dashboards and folders
    Search {
        /// Match against the title
        #[arg(long)]
        query: Option<String>,
        /// Tags every result must carry (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tag: Vec<String>,
        /// dash-folder or dash-db
        #[arg(long = "type")]
        search_type: Option<String>,
        /// Dashboard ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        dashboard_id: Vec<String>,
        /// Folder ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        folder_id: Vec<String>,
        /// Only starred dashboards
        #[arg(long)]
        starred: Option<bool>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },
}

pub async fn run(
    config: Config,
    command: DashboardsCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        DashboardsCommand::Search {
            query,
            tag,
            search_type,
            dashboard_id,
            folder_id,
            starred,
            limit,
            page,
        } => {
            let params = DashboardSearchParams {
                query,
                tags: tag,
                search_type,
                dashboard_ids: dashboard_id,
                folder_ids: folder_id,
                starred,
                limit,
                page,
            };
            let client = build_client(&config)?;
            let dashboards = cancel
                .run(client.search_dashboards(&params))
                .await
                .context("Failed to search dashboards")?;
            output.emit("Dashboard", &dashboards)
        }
    }
}
