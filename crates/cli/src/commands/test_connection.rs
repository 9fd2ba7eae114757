//! Connectivity check.
//!
//! Prints `ok` when the credentials are accepted and the authorization
//! message when Grafana answers 401 or 403. Any other failure is an error.

use anyhow::{Context, Result};
use grafana_client::ConnectionCheck;
use grafana_config::Config;

use super::build_client;
use crate::cancellation::CancellationToken;

pub async fn run(config: Config, cancel: &CancellationToken) -> Result<()> {
    let client = build_client(&config)?;
    let check = cancel
        .run(client.test_connection())
        .await
        .context("Failed to reach Grafana")?;

    println!("{check}");
    match check {
        ConnectionCheck::Ok => Ok(()),
        ConnectionCheck::AuthorizationError => Err(grafana_client::ClientError::AuthFailed(
            "credentials were rejected".to_string(),
        )
        .into()),
    }
}
