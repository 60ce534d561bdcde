//! Tunables for the full-moon search and the month grid.

use chrono::{FixedOffset, Weekday};

use crate::error::EngineError;

/// Default number of days scanned for the next full moon.
pub const DEFAULT_HORIZON_DAYS: u32 = 60;
/// Default maximum distance of the phase age from 0.5 that counts as full.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Configuration for [`find_next_full_moon`](crate::find_next_full_moon).
///
/// # Example
///
/// ```
/// use lunacal_engine::LocatorConfig;
///
/// let config = LocatorConfig::new().with_horizon_days(90).with_tolerance(0.01);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.horizon_days(), 90);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    /// Number of days to scan, starting at day 0.
    horizon_days: u32,
    /// A day matches when `|phase_age - 0.5| < tolerance`.
    tolerance: f64,
}

impl LocatorConfig {
    /// Creates a configuration with the defaults (60 days, tolerance 0.02).
    pub fn new() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the number of days to scan.
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Sets the full-moon tolerance on the phase age.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the number of days to scan.
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Returns the full-moon tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the horizon is zero or the tolerance is not a
    /// finite value in (0, 0.5].
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.horizon_days < 1 {
            return Err(EngineError::InvalidHorizon {
                horizon_days: self.horizon_days,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance > 0.5 {
            return Err(EngineError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for month grids.
///
/// Calendar days are interpreted in a fixed UTC offset; each day is sampled
/// at 12:00 local time.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use lunacal_engine::GridConfig;
///
/// let config = GridConfig::new()
///     .with_week_start(Weekday::Mon)
///     .with_utc_offset_minutes(120);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Weekday shown in the first grid column.
    week_start: Weekday,
    /// Offset of local calendar days from UTC, in minutes.
    utc_offset_minutes: i32,
}

impl GridConfig {
    /// Creates a configuration with Sunday-first weeks in UTC.
    pub fn new() -> Self {
        Self {
            week_start: Weekday::Sun,
            utc_offset_minutes: 0,
        }
    }

    /// Sets the weekday of the first grid column.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the local UTC offset in minutes (east positive).
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Returns the weekday of the first grid column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the local UTC offset in minutes.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Returns the local UTC offset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidUtcOffset`] if the offset is not
    /// strictly within one day.
    pub fn utc_offset(&self) -> Result<FixedOffset, EngineError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(EngineError::InvalidUtcOffset {
                minutes: self.utc_offset_minutes,
            })
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.utc_offset().map(|_| ())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_defaults() {
        let cfg = LocatorConfig::default();
        assert_eq!(cfg.horizon_days(), 60);
        assert!((cfg.tolerance() - 0.02).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_horizon_rejected() {
        let cfg = LocatorConfig::new().with_horizon_days(0);
        assert_eq!(
            cfg.validate().unwrap_err(),
            EngineError::InvalidHorizon { horizon_days: 0 }
        );
    }

    #[test]
    fn bad_tolerances_rejected() {
        for t in [0.0, -0.01, 0.51, f64::NAN, f64::INFINITY] {
            let cfg = LocatorConfig::new().with_tolerance(t);
            assert!(
                matches!(cfg.validate(), Err(EngineError::InvalidTolerance { .. })),
                "tolerance {t} should be rejected"
            );
        }
        assert!(LocatorConfig::new().with_tolerance(0.5).validate().is_ok());
    }

    #[test]
    fn grid_defaults() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.week_start(), Weekday::Sun);
        assert_eq!(cfg.utc_offset_minutes(), 0);
        assert_eq!(cfg.utc_offset().unwrap(), FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn utc_offset_bounds() {
        assert!(GridConfig::new().with_utc_offset_minutes(-720).validate().is_ok());
        assert!(GridConfig::new().with_utc_offset_minutes(14 * 60).validate().is_ok());
        assert_eq!(
            GridConfig::new()
                .with_utc_offset_minutes(24 * 60)
                .validate()
                .unwrap_err(),
            EngineError::InvalidUtcOffset { minutes: 1440 }
        );
        assert!(GridConfig::new().with_utc_offset_minutes(i32::MAX).validate().is_err());
    }
}
