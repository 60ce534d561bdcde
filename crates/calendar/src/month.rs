//! Zero-based month index and year/month pairs.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::days::month_length;
use crate::error::CalendarError;
use crate::weekday::days_from;

/// Zero-based month index (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// January.
    pub const JANUARY: Self = Self(0);
    /// February.
    pub const FEBRUARY: Self = Self(1);
    /// December.
    pub const DECEMBER: Self = Self(11);

    /// Creates a new `MonthIndex` from a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] if `index` is not in 0..=11.
    /// Out-of-range values are never wrapped.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        if index > 11 {
            return Err(CalendarError::InvalidMonthIndex { month_index: index });
        }
        Ok(Self(index))
    }

    /// Creates a `MonthIndex` from a one-based month number (1 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthNumber`] if `month` is not in 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonthNumber { month });
        }
        Ok(Self(month - 1))
    }

    /// Returns the zero-based index (0..=11).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the one-based month number (1..=12).
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    /// Returns the index as a `usize` for table lookups.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    #[serde(rename = "month_index")]
    month: MonthIndex,
}

impl YearMonth {
    /// Creates a `YearMonth` from a year and a zero-based month index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] if `month_index` is not in 0..=11.
    pub fn new(year: i32, month_index: u8) -> Result<Self, CalendarError> {
        Ok(Self::from_parts(year, MonthIndex::new(month_index)?))
    }

    /// Creates a `YearMonth` from an already-validated [`MonthIndex`].
    pub fn from_parts(year: i32, month: MonthIndex) -> Self {
        Self { year, month }
    }

    /// Returns the month containing `date`.
    pub fn of_date(date: NaiveDate) -> Self {
        // month0() is always 0..=11
        Self {
            year: date.year(),
            month: MonthIndex(date.month0() as u8),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> MonthIndex {
        self.month
    }

    /// Returns the number of days in this month (28..=31).
    pub fn days_in_month(self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Returns the date of `day` within this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is 0 or past the end of
    /// the month, or [`CalendarError::YearOutOfRange`] if the year cannot be
    /// represented.
    pub fn date(self, day: u8) -> Result<NaiveDate, CalendarError> {
        let max_day = self.days_in_month();
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                year: self.year,
                month: self.month.number(),
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.number()), u32::from(day))
            .ok_or(CalendarError::YearOutOfRange {
                year: i64::from(self.year),
            })
    }

    /// Returns the first day of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year cannot be represented.
    pub fn first_day(self) -> Result<NaiveDate, CalendarError> {
        self.date(1)
    }

    /// Returns the number of empty cells before day 1 in a grid whose
    /// columns start on `week_start` (0..=6).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year cannot be represented.
    pub fn leading_padding(self, week_start: Weekday) -> Result<u8, CalendarError> {
        let first = self.first_day()?;
        Ok(days_from(first.weekday(), week_start))
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of_date(date) == self
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_index_valid_range() {
        for i in 0..=11 {
            assert_eq!(MonthIndex::new(i).unwrap().get(), i);
        }
    }

    #[test]
    fn month_index_rejects_twelve() {
        assert_eq!(
            MonthIndex::new(12).unwrap_err(),
            CalendarError::InvalidMonthIndex { month_index: 12 }
        );
    }

    #[test]
    fn month_number_round_trip() {
        let m = MonthIndex::from_number(12).unwrap();
        assert_eq!(m, MonthIndex::DECEMBER);
        assert_eq!(m.number(), 12);
        assert_eq!(
            MonthIndex::from_number(0).unwrap_err(),
            CalendarError::InvalidMonthNumber { month: 0 }
        );
        assert_eq!(
            MonthIndex::from_number(13).unwrap_err(),
            CalendarError::InvalidMonthNumber { month: 13 }
        );
    }

    #[test]
    fn of_date_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ym = YearMonth::of_date(date);
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month().get(), 2);
        assert!(ym.contains(date));
        assert!(!YearMonth::new(2024, 3).unwrap().contains(date));
    }

    #[test]
    fn date_bounds() {
        let feb = YearMonth::new(2023, 1).unwrap();
        assert_eq!(
            feb.date(28).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            feb.date(29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                year: 2023,
                month: 2,
                max_day: 28,
            }
        );
        assert!(feb.date(0).is_err());
    }

    #[test]
    fn unrepresentable_year() {
        let far = YearMonth::new(i32::MAX, 0).unwrap();
        assert_eq!(
            far.first_day().unwrap_err(),
            CalendarError::YearOutOfRange {
                year: i64::from(i32::MAX)
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(YearMonth::new(2024, 0).unwrap().to_string(), "2024-01");
        assert_eq!(YearMonth::new(987, 11).unwrap().to_string(), "0987-12");
    }

    #[test]
    fn ordering() {
        let dec = YearMonth::new(2023, 11).unwrap();
        let jan = YearMonth::new(2024, 0).unwrap();
        assert!(dec < jan);
    }
}
