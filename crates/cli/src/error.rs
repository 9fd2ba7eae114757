//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use grafana_client::ClientError;

/// Structured exit codes for grafana-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// Invalid or missing credentials (HTTP 401).
    AuthenticationFailed = 2,

    /// Network, timeout, DNS or TLS failure. Scripts may retry.
    ConnectionError = 3,

    /// Alert, user, team or organization does not exist (HTTP 404).
    NotFound = 4,

    /// Bad arguments rejected locally or with HTTP 400.
    ValidationError = 5,

    /// Insufficient privileges (HTTP 403).
    PermissionDenied = 6,

    /// HTTP 429 after retries ran out.
    RateLimited = 7,

    /// HTTP 502/503/504 after retries ran out.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::Timeout(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::ValidationError(_) | ClientError::InvalidResponse(_) => {
                ExitCode::ValidationError
            }
            ClientError::MaxRetriesExceeded(_) => ExitCode::ServiceUnavailable,
        }
    }
}

/// Extract exit codes from `anyhow` errors.
pub trait ExitCodeExt {
    /// `GeneralError` unless a `ClientError` is somewhere in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
