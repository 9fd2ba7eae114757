//! Configuration management for the Grafana connector.
//!
//! This crate provides types and loaders for Grafana connection settings,
//! incident fetch settings, and the persisted fetch watermark.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{FetchStateStore, LastRun, StateFileError};
pub use types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, FetchConfig, Lookback, LookbackError,
    parse_list,
};
