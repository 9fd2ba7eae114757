//! Configuration type definitions for the Grafana connector.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connections and incident fetching.
//! - Ensure consistent defaults and type safety across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Fetch state persistence (see `persistence` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;
mod fetch;
mod lookback;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use fetch::{FetchConfig, parse_list};
pub use lookback::{Lookback, LookbackError};
