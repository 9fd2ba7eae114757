//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with 429, 502, 503 or 504 are retried after 1s, 2s,
//! 4s, ... (2^attempt, at most 60s), or after the server's `Retry-After`
//! seconds when it sends one. Every other failure is returned on the spot.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Upper bound for a computed backoff; `Retry-After` is honoured as sent.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Grafana's error body: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct GrafanaMessage {
    message: String,
}

/// Sends a request, retrying transient statuses up to `max_retries` times.
///
/// # Errors
///
/// - `ClientError::ApiError` for a non-2xx response, including the last
///   retryable one once retries run out.
/// - `ClientError::HttpError` for transport failures, timeouts included.
/// - `ClientError::MaxRetriesExceeded` if the request body cannot be replayed.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let Some(attempt_builder) = builder.try_clone() else {
            debug!("Request builder cannot be cloned for retry");
            return Err(ClientError::MaxRetriesExceeded(attempt));
        };

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
            if attempt > 0 {
                m.record_retry(endpoint, method, attempt);
            }
        }

        let started = Instant::now();
        let response = match attempt_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ClientError::from(e);
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, started.elapsed(), None);
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        if let Some(m) = metrics {
            m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
        }

        if response.status().is_success() {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if ClientError::is_retryable_status(status) && attempt < max_retries {
            let backoff = retry_after(&response).unwrap_or_else(|| backoff_for(attempt));
            debug!(
                status,
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_ms = backoff.as_millis() as u64,
                "Transient response, retrying"
            );
            tokio::time::sleep(backoff).await;
            continue;
        }

        let err = api_error(response).await;
        if let Some(m) = metrics {
            m.record_client_error(endpoint, method, &err);
        }
        return Err(err);
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// `2^attempt` seconds, capped at [`MAX_BACKOFF`].
fn backoff_for(attempt: usize) -> Duration {
    u32::try_from(attempt)
        .ok()
        .and_then(|exp| 2u64.checked_pow(exp))
        .map_or(MAX_BACKOFF, |secs| Duration::from_secs(secs).min(MAX_BACKOFF))
}

/// `Retry-After` in delta-seconds form.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<GrafanaMessage>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };

    ClientError::ApiError {
        status,
        url,
        message,
    }
}
