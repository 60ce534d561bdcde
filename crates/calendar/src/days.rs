//! Leap years and day counts for the Gregorian calendar.

use crate::error::CalendarError;
use crate::month::MonthIndex;

/// Number of days in each month of a common year, indexed by zero-based month.
pub(crate) const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Years divisible by 4 are leap years, except centuries, which are leap
/// years only when divisible by 400. Uses the proleptic Gregorian calendar,
/// so year 0 is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in a month (28..=31).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonthIndex`] if `month_index` is not in 0..=11.
///
/// # Examples
///
/// ```
/// use lunacal_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2023, 1).unwrap(), 28);
/// assert_eq!(days_in_month(2024, 1).unwrap(), 29);
/// assert_eq!(days_in_month(2024, 11).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month_index: u8) -> Result<u8, CalendarError> {
    let month = MonthIndex::new(month_index)?;
    Ok(month_length(year, month))
}

/// Day count for an already-validated month.
pub(crate) fn month_length(year: i32, month: MonthIndex) -> u8 {
    if month == MonthIndex::FEBRUARY && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn leap_year_zero_and_negative() {
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn table_sums_to_common_year() {
        let total: u32 = DAYS_PER_MONTH.iter().map(|&d| u32::from(d)).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn february_leap_and_common() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
    }

    #[test]
    fn thirty_and_thirty_one_day_months() {
        for m in [0_u8, 2, 4, 6, 7, 9, 11] {
            assert_eq!(days_in_month(2023, m).unwrap(), 31, "month index {m}");
        }
        for m in [3_u8, 5, 8, 10] {
            assert_eq!(days_in_month(2023, m).unwrap(), 30, "month index {m}");
        }
    }

    #[test]
    fn invalid_month_index() {
        assert_eq!(
            days_in_month(2024, 12).unwrap_err(),
            CalendarError::InvalidMonthIndex { month_index: 12 }
        );
    }
}
