//! # lunacal-calendar
//!
//! Pure Gregorian month arithmetic for month-grid calendars.
//!
//! ## Architecture
//!
//! ```text
//! MonthIndex (0..=11) ──► YearMonth ──► days_in_month()   (28..=31, leap aware)
//!                              │    └──► leading_padding() (0..=6, week-start relative)
//!                              └──► shift() / next() / previous()   (month navigator)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Weekday;
//! use lunacal_calendar::{YearMonth, days_in_month, shift_month};
//!
//! // February of a leap year
//! assert_eq!(days_in_month(2024, 1).unwrap(), 29);
//!
//! // December navigates forward into January of the next year
//! assert_eq!(shift_month(2024, 11, 1).unwrap(), (2025, 0));
//!
//! // 1 September 2024 is a Sunday: no padding with a Sunday week start
//! let sept = YearMonth::new(2024, 8).unwrap();
//! assert_eq!(sept.leading_padding(Weekday::Sun).unwrap(), 0);
//! assert_eq!(sept.leading_padding(Weekday::Mon).unwrap(), 6);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Zero-based month index newtype and year/month pair |
//! | `days` | Leap years and day counts |
//! | `weekday` | Leading padding for week-aligned grids |
//! | `navigate` | One-step month navigation with year rollover |
//! | `error` | Error types |

mod days;
mod error;
mod month;
mod navigate;
mod weekday;

pub use days::{days_in_month, is_leap_year};
pub use error::CalendarError;
pub use month::{MonthIndex, YearMonth};
pub use navigate::shift_month;
pub use weekday::leading_padding;
