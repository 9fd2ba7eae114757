//! Configuration context for command execution.
//!
//! Invariants:
//! - Placeholder contexts are only built for commands that never contact Grafana.

/// Context for command execution, distinguishing real and placeholder configs.
pub(crate) enum ConfigCommandContext {
    /// A validated config merged from `.env`, environment and flags.
    Real(Box<grafana_config::Config>),
    /// For commands such as `completions` that need no connection details.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<grafana_config::Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring connection details"
                )
            }
        }
    }
}
