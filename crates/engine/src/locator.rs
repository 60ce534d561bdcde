//! Forward search for the next full moon.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use lunacal_phase::{IlluminationSample, MoonOracle};

use crate::config::LocatorConfig;
use crate::error::EngineError;

const MS_PER_DAY: i64 = 86_400_000;

/// Outcome of a full-moon search.
///
/// `date` is `None` when no day within the horizon was close enough to full;
/// consumers should show that as "unknown", never as a stale date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FullMoonResult {
    date: Option<DateTime<Utc>>,
    days_until: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<IlluminationSample>,
}

impl FullMoonResult {
    /// A search that found nothing within its horizon.
    pub fn not_found() -> Self {
        Self {
            date: None,
            days_until: 0,
            sample: None,
        }
    }

    /// Returns the matching instant, if any.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Returns whole days until the match, rounded up (0 when not found).
    pub fn days_until(&self) -> u32 {
        self.days_until
    }

    /// Returns the oracle sample at the matching instant.
    pub fn sample(&self) -> Option<IlluminationSample> {
        self.sample
    }

    /// Returns `true` if a full moon was found.
    pub fn is_found(&self) -> bool {
        self.date.is_some()
    }
}

/// Whole days from `now` to `candidate`, rounded up and never negative.
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use lunacal_engine::days_until;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(days_until(now + TimeDelta::hours(30), now), 2);
/// assert_eq!(days_until(now - TimeDelta::minutes(5), now), 0);
/// ```
pub fn days_until(candidate: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let ms = (candidate - now).num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    let days = ms / MS_PER_DAY + i64::from(ms % MS_PER_DAY != 0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Finds the first day within the horizon whose phase age is close to full.
///
/// Samples the oracle at `now + d days` for `d = 0..horizon_days` and stops
/// at the first sample with `|phase_age - 0.5| < tolerance`. Later, closer
/// matches are not considered.
///
/// # Errors
///
/// Returns [`EngineError::InvalidHorizon`] / [`EngineError::InvalidTolerance`]
/// for a bad configuration, [`EngineError::Oracle`] if any sample fails,
/// and [`EngineError::HorizonOutOfRange`] if a step cannot be represented.
/// Not finding a full moon is not an error.
#[tracing::instrument(skip(oracle, config), fields(horizon_days = config.horizon_days()))]
pub fn find_next_full_moon<O>(
    now: DateTime<Utc>,
    oracle: &O,
    config: &LocatorConfig,
) -> Result<FullMoonResult, EngineError>
where
    O: MoonOracle + ?Sized,
{
    config.validate()?;

    for day in 0..config.horizon_days() {
        let at = now
            .checked_add_signed(TimeDelta::days(i64::from(day)))
            .ok_or(EngineError::HorizonOutOfRange { start: now, day })?;
        let sample = oracle.sample(at)?;
        trace!(day, phase_age = sample.phase_age(), "sampled");

        if sample.distance_from_full() < config.tolerance() {
            let days_until = days_until(at, now);
            debug!(%at, days_until, "full moon found");
            return Ok(FullMoonResult {
                date: Some(at),
                days_until,
                sample: Some(sample),
            });
        }
    }

    debug!("no full moon within horizon");
    Ok(FullMoonResult::not_found())
}
