//! Error types for the lunacal-engine crate.

use chrono::NaiveDate;
use lunacal_calendar::CalendarError;
use lunacal_phase::OracleError;

/// Error type for all fallible operations in the lunacal-engine crate.
///
/// Errors are local to one query: a failed grid or search leaves nothing
/// behind and the next call starts fresh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A month index, day, or year was rejected by the calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The oracle failed for one of the sampled instants; the whole query fails.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Returned when the search horizon is zero days.
    #[error("horizon must be at least 1 day, got {horizon_days}")]
    InvalidHorizon {
        /// The invalid horizon.
        horizon_days: u32,
    },

    /// Returned when the full-moon tolerance is not finite or not in (0, 0.5].
    #[error("tolerance must be finite and in (0, 0.5], got {tolerance}")]
    InvalidTolerance {
        /// The invalid tolerance.
        tolerance: f64,
    },

    /// Returned when a UTC offset is not strictly within one day.
    #[error("UTC offset must be strictly within +-24h, got {minutes} minutes")]
    InvalidUtcOffset {
        /// The invalid offset in minutes.
        minutes: i32,
    },

    /// Returned when a search step lands outside the representable time range.
    #[error("search day {day} after {start} is out of range")]
    HorizonOutOfRange {
        /// Start of the search.
        start: chrono::DateTime<chrono::Utc>,
        /// Offset in days that could not be represented.
        day: u32,
    },

    /// Returned when midday of a calendar day cannot be represented as an instant.
    #[error("midday of {date} is out of range")]
    DateOutOfRange {
        /// The calendar day.
        date: NaiveDate,
    },
}
