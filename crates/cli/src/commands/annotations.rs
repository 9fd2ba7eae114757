//! Annotations command implementation.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::Subcommand;
use grafana_client::NewAnnotation;
use grafana_config::Config;
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum AnnotationsCommand {
    /// Create an annotation, optionally bound to a dashboard panel
    Create {
        /// Annotation text
        #[arg(long)]
        text: String,
        /// Dashboard to attach the annotation to
        #[arg(long)]
        dashboard_id: Option<i64>,
        /// Panel to attach the annotation to
        #[arg(long)]
        panel_id: Option<i64>,
        /// Tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Start time: epoch milliseconds or RFC 3339
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
        /// End time for a region annotation: epoch milliseconds or RFC 3339
        #[arg(long, value_parser = parse_time)]
        time_end: Option<DateTime<Utc>>,
    },
}

/// Accept `1700000000000` or `2023-11-14T22:13:20Z`.
fn parse_time(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(millis) = raw.parse::<i64>() {
        return Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| format!("'{raw}' is out of range"));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("'{raw}' is neither epoch milliseconds nor RFC 3339: {e}"))
}

pub async fn run(
    config: Config,
    command: AnnotationsCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        AnnotationsCommand::Create {
            text,
            dashboard_id,
            panel_id,
            tags,
            time,
            time_end,
        } => {
            let annotation = NewAnnotation {
                dashboard_id,
                panel_id,
                tags,
                text,
                time,
                time_end,
            };
            info!("Creating annotation");
            let client = build_client(&config)?;
            let created = cancel
                .run(client.create_annotation(&annotation))
                .await
                .context("Failed to create annotation")?;
            output.emit("Annotation", &created)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_millis_and_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(parse_time("1700000000000").unwrap(), expected);
        assert_eq!(parse_time("2023-11-14T22:13:20Z").unwrap(), expected);
        assert_eq!(parse_time("2023-11-15T00:13:20+02:00").unwrap(), expected);
        assert!(parse_time("yesterday").is_err());
    }
}
