//! Organizations command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::Paging;
use grafana_config::Config;
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum OrgsCommand {
    /// Create an organization
    Create {
        /// Organization name
        name: String,
    },
    /// List organizations
    List {
        #[arg(long)]
        perpage: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Look up an organization by name
    GetByName {
        /// Organization name
        name: String,
    },
    /// Look up an organization by id
    GetById {
        /// Organization id
        org_id: String,
    },
}

pub async fn run(
    config: Config,
    command: OrgsCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;
    match command {
        OrgsCommand::Create { name } => {
            info!("Creating organization {}", name);
            let created = cancel
                .run(client.create_org(&name))
                .await
                .with_context(|| format!("Failed to create organization {name}"))?;
            output.emit("Added Organization", &created)
        }
        OrgsCommand::List { perpage, page } => {
            let orgs = cancel
                .run(client.list_orgs(Paging::new(perpage, page)))
                .await
                .context("Failed to list organizations")?;
            output.emit("Organization", &orgs)
        }
        OrgsCommand::GetByName { name } => {
            let org = cancel
                .run(client.get_org_by_name(&name))
                .await
                .with_context(|| format!("Failed to get organization {name}"))?;
            output.emit("Organization", &org)
        }
        OrgsCommand::GetById { org_id } => {
            let org = cancel
                .run(client.get_org_by_id(&org_id))
                .await
                .with_context(|| format!("Failed to get organization {org_id}"))?;
            output.emit("Organization", &org)
        }
    }
}
