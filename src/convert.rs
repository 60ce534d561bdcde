//! Pure conversion functions: TOML config structs + CLI overrides -> crate API config types.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc, Weekday};

use lunacal_engine::{Clock, FixedClock, GridConfig, LocatorConfig, SystemClock};

use crate::config::{CalendarToml, LocatorToml};

/// Parses a weekday name ("sunday", "Mon", ...) into the first grid column.
pub fn parse_week_start(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow!("unknown week start: {s:?}"))
}

/// Builds a [`LocatorConfig`] from the TOML settings, letting CLI flags win.
pub fn build_locator_config(
    toml: &LocatorToml,
    horizon_days: Option<u32>,
    tolerance: Option<f64>,
) -> Result<LocatorConfig> {
    let cfg = LocatorConfig::new()
        .with_horizon_days(horizon_days.unwrap_or(toml.horizon_days))
        .with_tolerance(tolerance.unwrap_or(toml.tolerance));
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`GridConfig`] from the TOML settings, letting CLI flags win.
pub fn build_grid_config(
    toml: &CalendarToml,
    week_start: Option<&str>,
    utc_offset_minutes: Option<i32>,
) -> Result<GridConfig> {
    let week_start = parse_week_start(week_start.unwrap_or(&toml.week_start))?;
    let cfg = GridConfig::new()
        .with_week_start(week_start)
        .with_utc_offset_minutes(utc_offset_minutes.unwrap_or(toml.utc_offset_minutes));
    cfg.validate()?;
    Ok(cfg)
}

/// A fixed clock when `--now` was given, the system clock otherwise.
pub fn clock_for(now: Option<DateTime<Utc>>) -> Box<dyn Clock> {
    match now {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(SystemClock),
    }
}
