//! # lunacal-ephemeris
//!
//! A low-precision analytic model of the sun and moon, good to a fraction
//! of a degree over a few centuries around J2000, packaged as a
//! [`MoonOracle`](lunacal_phase::MoonOracle).
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunacal_ephemeris::SunCalcOracle;
//! use lunacal_phase::{MoonOracle, PhaseCategory};
//!
//! // Full moon of 25 January 2024 (17:54 UTC)
//! let at = Utc.with_ymd_and_hms(2024, 1, 25, 18, 0, 0).unwrap();
//! let sample = SunCalcOracle.sample(at).unwrap();
//! assert_eq!(sample.category(), PhaseCategory::Full);
//! ```
//!
//! # Architecture
//!
//! ```text
//! SunCalcOracle::sample(t)
//!   ├─ days_since_j2000()     (julian.rs)
//!   ├─ sun_coords(), moon_coords()   (position.rs)
//!   └─ illumination()          (oracle.rs)
//! ```

mod julian;
mod oracle;
mod position;

pub use julian::{days_since_j2000, julian_day};
pub use oracle::{Illumination, SunCalcOracle, illumination};
