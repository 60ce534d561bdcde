//! # lunacal-engine
//!
//! The lunar phase calendar engine: finds the next full moon and builds
//! week-aligned month grids annotated with daily illumination.
//!
//! Every query samples an injected [`MoonOracle`](lunacal_phase::MoonOracle)
//! and returns an immutable value; nothing is cached between calls. "Now"
//! comes from the caller (or a [`Clock`]), never from an implicit global.
//!
//! # Quick start
//!
//! ```
//! use chrono::{DateTime, TimeZone, Utc};
//! use lunacal_engine::{GridConfig, LocatorConfig, build_month_grid, find_next_full_moon};
//! use lunacal_phase::{IlluminationSample, OracleError};
//!
//! // A toy oracle: one lunation every 30 days, new moon at the Unix epoch.
//! let oracle = |at: DateTime<Utc>| -> Result<IlluminationSample, OracleError> {
//!     let age = (at.timestamp() as f64 / 86_400.0 / 30.0).rem_euclid(1.0);
//!     let fraction = (1.0 - (age * std::f64::consts::TAU).cos()) / 2.0;
//!     IlluminationSample::new(fraction, age).map_err(|e| OracleError::new(at, e.to_string()))
//! };
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let next = find_next_full_moon(now, &oracle, &LocatorConfig::new()).unwrap();
//! assert!(next.is_found());
//! assert!(next.days_until() < 30);
//!
//! let grid = build_month_grid(2024, 1, &oracle, &GridConfig::new()).unwrap();
//! assert_eq!(grid.days_in_month(), 29);
//! ```
//!
//! # Architecture
//!
//! ```text
//! find_next_full_moon()      (locator.rs)
//!   └─ oracle.sample(now + d days), first |age - 0.5| < tolerance
//!
//! build_month_grid()         (grid.rs)
//!   ├─ YearMonth::leading_padding()   (lunacal-calendar)
//!   ├─ oracle.sample(local midday) per day
//!   └─ MonthGrid { padding cells, day cells }
//!
//! CalendarView               (view.rs)
//!   └─ current month + next()/previous() + grid()
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod locator;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_HORIZON_DAYS, DEFAULT_TOLERANCE, GridConfig, LocatorConfig};
pub use error::EngineError;
pub use grid::{CalendarSlot, DaySlot, MonthGrid, build_grid_for, build_month_grid, midday};
pub use locator::{FullMoonResult, days_until, find_next_full_moon};
pub use view::{CalendarView, local_today};
