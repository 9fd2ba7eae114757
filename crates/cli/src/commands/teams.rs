//! Teams command implementation.
//!
//! Responsibilities:
//! - Search teams and show a team or its members.
//! - Create and delete teams, add and remove members.

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::{NewTeam, Paging, TeamSearchParams};
use grafana_config::Config;
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum TeamsCommand {
    /// Search teams
    Search {
        #[arg(long)]
        perpage: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        /// Match against the team name
        #[arg(long)]
        query: Option<String>,
        /// Exact team name
        #[arg(long)]
        name: Option<String>,
    },
    /// Show a team
    Get {
        /// Team id
        team_id: String,
    },
    /// List the members of a team
    Members {
        /// Team id
        team_id: String,
    },
    /// Add a user to a team
    AddUser {
        /// Team id
        team_id: String,
        /// User id
        user_id: String,
    },
    /// Remove a user from a team
    RemoveUser {
        /// Team id
        team_id: String,
        /// User id
        user_id: String,
    },
    /// Create a team
    Add {
        /// Team name
        name: String,
        #[arg(long)]
        email: Option<String>,
        /// Organization to create the team in
        #[arg(long)]
        org_id: Option<i64>,
    },
    /// Delete a team
    Delete {
        /// Team id
        team_id: String,
    },
}

pub async fn run(
    config: Config,
    command: TeamsCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;
    match command {
        TeamsCommand::Search {
            perpage,
            page,
            query,
            name,
        } => {
            let params = TeamSearchParams {
                paging: Paging::new(perpage, page),
                query,
                name,
            };
            info!("Searching teams");
            let teams = cancel
                .run(client.search_teams(&params))
                .await
                .context("Failed to search teams")?;
            output.emit("Teams", &teams)
        }
        TeamsCommand::Get { team_id } => {
            let team = cancel
                .run(client.get_team(&team_id))
                .await
                .with_context(|| format!("Failed to get team {team_id}"))?;
            output.emit("Team", &team)
        }
        TeamsCommand::Members { team_id } => {
            let members = cancel
                .run(client.get_team_members(&team_id))
                .await
                .with_context(|| format!("Failed to get members of team {team_id}"))?;
            output.emit("Team Members", &members)
        }
        TeamsCommand::AddUser { team_id, user_id } => {
            info!("Adding user {} to team {}", user_id, team_id);
            let message = cancel
                .run(client.add_user_to_team(&team_id, &user_id))
                .await
                .with_context(|| format!("Failed to add user {user_id} to team {team_id}"))?;
            output.emit_message("Team", &message)
        }
        TeamsCommand::RemoveUser { team_id, user_id } => {
            info!("Removing user {} from team {}", user_id, team_id);
            let message = cancel
                .run(client.remove_user_from_team(&team_id, &user_id))
                .await
                .with_context(|| format!("Failed to remove user {user_id} from team {team_id}"))?;
            output.emit_message("Team", &message)
        }
        TeamsCommand::Add {
            name,
            email,
            org_id,
        } => {
            info!("Creating team {}", name);
            let team = NewTeam {
                name,
                email,
                org_id,
            };
            let added = cancel
                .run(client.add_team(&team))
                .await
                .with_context(|| format!("Failed to create team {}", team.name))?;
            output.emit("Added Team", &added)
        }
        TeamsCommand::Delete { team_id } => {
            info!("Deleting team {}", team_id);
            let message = cancel
                .run(client.delete_team(&team_id))
                .await
                .with_context(|| format!("Failed to delete team {team_id}"))?;
            output.emit_message("Team", &message)
        }
    }
}
