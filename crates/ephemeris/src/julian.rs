//! Julian day conversions.

use chrono::{DateTime, Utc};

const MS_PER_DAY: f64 = 86_400_000.0;
/// Julian day number of the Unix epoch's noon.
const J1970: f64 = 2_440_588.0;
/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
const J2000: f64 = 2_451_545.0;

/// Returns the Julian day of an instant.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    at.timestamp_millis() as f64 / MS_PER_DAY - 0.5 + J1970
}

/// Returns fractional days elapsed since J2000.0.
pub fn days_since_j2000(at: DateTime<Utc>) -> f64 {
    julian_day(at) - J2000
}
