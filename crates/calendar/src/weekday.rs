//! Leading padding for week-aligned month grids.

use chrono::Weekday;

use crate::error::CalendarError;
use crate::month::YearMonth;

/// Returns how many empty cells precede day 1 in a week-aligned grid.
///
/// The result is the weekday of the first day of the month counted from
/// `week_start` (0 when the month starts on `week_start`), so it is always
/// in 0..=6.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonthIndex`] if `month_index` is not in
/// 0..=11, or [`CalendarError::YearOutOfRange`] if the year cannot be
/// represented as a date.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use lunacal_calendar::leading_padding;
///
/// // 1 March 2024 was a Friday
/// assert_eq!(leading_padding(2024, 2, Weekday::Sun).unwrap(), 5);
/// assert_eq!(leading_padding(2024, 2, Weekday::Mon).unwrap(), 4);
/// ```
pub fn leading_padding(year: i32, month_index: u8, week_start: Weekday) -> Result<u8, CalendarError> {
    YearMonth::new(year, month_index)?.leading_padding(week_start)
}

/// Days from `week_start` forward to `day` (0..=6).
pub(crate) fn days_from(day: Weekday, week_start: Weekday) -> u8 {
    let offset = (day.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7;
    offset as u8
}
