//! Month navigation with year rollover.

use crate::error::CalendarError;
use crate::month::{MonthIndex, YearMonth};

impl YearMonth {
    /// Moves `delta` months forward (positive) or backward (negative).
    ///
    /// Stepping past December rolls into January of the next year and
    /// stepping before January rolls into December of the previous year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the resulting year does
    /// not fit in an `i32`.
    pub fn shift(self, delta: i32) -> Result<Self, CalendarError> {
        let absolute =
            i64::from(self.year()) * 12 + i64::from(self.month().get()) + i64::from(delta);
        let year = absolute.div_euclid(12);
        let month = absolute.rem_euclid(12);
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange { year })?;
        // rem_euclid(12) is always 0..=11
        let month = MonthIndex::new(month as u8)?;
        Ok(Self::from_parts(year, month))
    }

    /// Returns the following month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] when stepping past `i32::MAX`.
    pub fn next(self) -> Result<Self, CalendarError> {
        self.shift(1)
    }

    /// Returns the preceding month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] when stepping before `i32::MIN`.
    pub fn previous(self) -> Result<Self, CalendarError> {
        self.shift(-1)
    }
}

/// Shifts a `(year, month_index)` pair by `delta` months.
///
/// The input month index is validated, never wrapped: only the result of
/// the `delta` arithmetic is normalized.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonthIndex`] if `month_index` is not in
/// 0..=11, or [`CalendarError::YearOutOfRange`] if the year overflows.
///
/// # Examples
///
/// ```
/// use lunacal_calendar::shift_month;
///
/// assert_eq!(shift_month(2024, 11, 1).unwrap(), (2025, 0));
/// assert_eq!(shift_month(2024, 0, -1).unwrap(), (2023, 11));
/// assert_eq!(shift_month(2024, 5, 1).unwrap(), (2024, 6));
/// ```
pub fn shift_month(year: i32, month_index: u8, delta: i32) -> Result<(i32, u8), CalendarError> {
    let shifted = YearMonth::new(year, month_index)?.shift(delta)?;
    Ok((shifted.year(), shifted.month().get()))
}
