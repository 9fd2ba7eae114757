//! Users command implementation.
//!
//! Responsibilities:
//! - Search users and show a user with their teams and organizations.
//! - Update a user's email, name, login or theme.
//!
//! Invariants:
//! - `update` without a login or email is rejected before any request is sent.

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::{Paging, UserUpdate};
use grafana_config::Config;
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Search users
    Search {
        /// Results per page
        #[arg(long)]
        perpage: Option<u32>,
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Match against login, email or name
        #[arg(long)]
        query: Option<String>,
    },
    /// Show a user
    Get {
        /// User id
        user_id: String,
    },
    /// List the teams a user belongs to
    Teams {
        /// User id
        user_id: String,
    },
    /// List the organizations a user belongs to
    Orgs {
        /// User id
        user_id: String,
    },
    /// Update a user
    Update {
        /// User id
        user_id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        login: Option<String>,
        /// UI theme (light, dark)
        #[arg(long)]
        theme: Option<String>,
    },
}

pub async fn run(
    config: Config,
    command: UsersCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;
    match command {
        UsersCommand::Search {
            perpage,
            page,
            query,
        } => {
            info!("Searching users");
            let users = cancel
                .run(client.search_users(Paging::new(perpage, page), query.as_deref()))
                .await
                .context("Failed to search users")?;
            output.emit("Users", &users)
        }
        UsersCommand::Get { user_id } => {
            let user = cancel
                .run(client.get_user(&user_id))
                .await
                .with_context(|| format!("Failed to get user {user_id}"))?;
            output.emit("User", &user)
        }
        UsersCommand::Teams { user_id } => {
            let teams = cancel
                .run(client.get_user_teams(&user_id))
                .await
                .with_context(|| format!("Failed to get teams for user {user_id}"))?;
            output.emit("Teams For User", &teams)
        }
        UsersCommand::Orgs { user_id } => {
            let orgs = cancel
                .run(client.get_user_orgs(&user_id))
                .await
                .with_context(|| format!("Failed to get organizations for user {user_id}"))?;
            output.emit("Organization For User", &orgs)
        }
        UsersCommand::Update {
            user_id,
            email,
            name,
            login,
            theme,
        } => {
            let update = UserUpdate {
                email,
                name,
                login,
                theme,
            };
            info!("Updating user {}", user_id);
            let message = cancel
                .run(client.update_user(&user_id, &update))
                .await
                .with_context(|| format!("Failed to update user {user_id}"))?;
            output.emit_message("User", &message)
        }
    }
}
