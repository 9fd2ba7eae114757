//! Relative lookback windows such as `3 days` or `12h`.
//!
//! Responsibilities:
//! - Parse human-written relative durations used for the first fetch window.
//!
//! Does NOT handle:
//! - Absolute timestamps (the fetch window is always relative to "now").
//!
//! Invariants:
//! - A parsed lookback is always strictly positive.
//! - Months count as 30 days and years as 365 days.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::constants::DEFAULT_FIRST_FETCH;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Errors produced while parsing a lookback string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookbackError {
    #[error("lookback is empty")]
    Empty,

    #[error("lookback must start with a whole number, got '{0}'")]
    InvalidNumber(String),

    #[error("unknown lookback unit '{0}' (expected minutes, hours, days, weeks, months or years)")]
    UnknownUnit(String),

    #[error("lookback must be greater than zero")]
    Zero,
}

/// A relative lookback window, keeping the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookback {
    raw: String,
    duration: Duration,
}

impl Lookback {
    /// The window length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The original text, e.g. `3 days`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self {
            raw: DEFAULT_FIRST_FETCH.to_string(),
            duration: Duration::from_secs(3 * DAY),
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Lookback {
    type Err = LookbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(LookbackError::Empty);
        }

        let lowered = raw.to_ascii_lowercase();
        let body = lowered.strip_suffix("ago").unwrap_or(&lowered).trim_end();

        let split = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        let (number, unit) = body.split_at(split);

        let amount: u64 = number
            .parse()
            .map_err(|_| LookbackError::InvalidNumber(raw.to_string()))?;
        if amount == 0 {
            return Err(LookbackError::Zero);
        }

        let unit_secs = unit_seconds(unit.trim())?;
        let secs = amount
            .checked_mul(unit_secs)
            .ok_or_else(|| LookbackError::InvalidNumber(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            duration: Duration::from_secs(secs),
        })
    }
}

fn unit_seconds(unit: &str) -> Result<u64, LookbackError> {
    let secs = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => 7 * DAY,
        "month" | "months" => 30 * DAY,
        "y" | "year" | "years" => 365 * DAY,
        other => return Err(LookbackError::UnknownUnit(other.to_string())),
    };
    Ok(secs)
}
