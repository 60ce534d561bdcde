use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lunacal_engine::{DEFAULT_HORIZON_DAYS, DEFAULT_TOLERANCE};

/// Top-level lunacal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunacalConfig {
    /// Full-moon search settings.
    #[serde(default)]
    pub locator: LocatorToml,

    /// Month grid settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

impl LunacalConfig {
    /// Reads the TOML file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocatorToml {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for LocatorToml {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_week_start() -> String {
    "sunday".to_string()
}
