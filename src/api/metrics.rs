//! Shared options for the time-series metrics endpoints.

use std::fmt;

use crate::api::check_limit;
use crate::clients::{ApiError, Params, INVALID_TZ_OFFSET, INVALID_UNITS};

/// Bucket size for time-series metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeUnit {
    /// One bucket per minute.
    Minute,
    /// One bucket per hour.
    Hour,
    /// One bucket per day.
    #[default]
    Day,
    /// One bucket per week, starting Sunday.
    Week,
    /// One bucket per week, starting Monday.
    MWeek,
    /// One bucket per month.
    Month,
}

impl TimeUnit {
    /// Returns the wire name of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::MWeek => "mweek",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by every metrics endpoint.
///
/// Unset fields are left to the server defaults.
///
/// # Example
///
/// ```rust
/// use bitly_api::{MetricsOptions, TimeUnit};
///
/// let options = MetricsOptions {
///     unit: Some(TimeUnit::Hour),
///     units: Some(24),
///     rollup: Some(true),
///     ..Default::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsOptions {
    /// Bucket size.
    pub unit: Option<TimeUnit>,
    /// Number of buckets; `-1` means all available.
    pub units: Option<i32>,
    /// Hour offset from UTC, in -12..=12.
    pub tz_offset: Option<i32>,
    /// Return a single total instead of a series.
    pub rollup: Option<bool>,
    /// Maximum number of results, in 1..=1000.
    pub limit: Option<u32>,
    /// Epoch timestamp the most recent bucket ends at.
    pub unit_reference_ts: Option<i64>,
}

impl MetricsOptions {
    /// Checks the options without sending anything.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] with code 500 and `INVALID_UNITS`,
    /// `INVALID_TZ_OFFSET` or `INVALID_LIMIT`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.units.is_some_and(|units| units < -1) {
            return Err(ApiError::invalid_argument(INVALID_UNITS));
        }
        if self.tz_offset.is_some_and(|tz| !(-12..=12).contains(&tz)) {
            return Err(ApiError::invalid_argument(INVALID_TZ_OFFSET));
        }
        check_limit(self.limit)
    }

    /// Validates the options and adds them to `params`.
    pub(crate) fn apply(&self, params: Params) -> Result<Params, ApiError> {
        self.validate()?;
        Ok(params
            .with_opt("unit", self.unit.map(TimeUnit::as_str))
            .with_opt("units", self.units)
            .with_opt("tz_offset", self.tz_offset)
            .with_opt("rollup", self.rollup)
            .with_opt("limit", self.limit)
            .with_opt("unit_reference_ts", self.unit_reference_ts))
    }
}
