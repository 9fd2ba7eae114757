//! Whole-second UTC watermark for the incident poller.
//!
//! Invariants:
//! - Sub-second precision is always dropped on construction.
//! - Persisted form is epoch milliseconds; RFC 3339 text is also accepted on read.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeDelta, Utc};
use thiserror::Error;

/// A persisted or alert timestamp that could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp '{raw}': expected epoch milliseconds or RFC 3339")]
pub struct TimestampError {
    pub raw: String,
}

/// Last-seen alert time. Ordered; never carries sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(DateTime<Utc>);

impl Watermark {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at.trunc_subsecs(0))
    }

    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::new)
    }

    /// Parse an RFC 3339 alert timestamp such as `newStateDate`.
    pub fn from_rfc3339(raw: &str) -> Result<Self, TimestampError> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| Self::new(dt.with_timezone(&Utc)))
            .map_err(|_| TimestampError {
                raw: raw.to_string(),
            })
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn to_epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// `self - lookback`, saturating at the earliest representable time.
    pub fn minus(&self, lookback: Duration) -> Self {
        let delta = TimeDelta::from_std(lookback).unwrap_or(TimeDelta::MAX);
        Self::new(
            self.0
                .checked_sub_signed(delta)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        )
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl FromStr for Watermark {
    type Err = TimestampError;

    /// Epoch milliseconds (`1704067205000`) or RFC 3339.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(millis) = trimmed.parse::<i64>() {
            return Self::from_epoch_millis(millis).ok_or_else(|| TimestampError {
                raw: s.to_string(),
            });
        }
        Self::from_rfc3339(trimmed)
    }
}

/// Where a fetch cycle starts.
///
/// `now - lookback` when nothing is persisted, otherwise the later of the
/// persisted watermark and `now - lookback`.
pub fn initial_watermark(
    persisted: Option<Watermark>,
    lookback: Duration,
    now: DateTime<Utc>,
) -> Watermark {
    let floor = Watermark::new(now).minus(lookback);
    match persisted {
        Some(persisted) => persisted.max(floor),
        None => floor,
    }
}
