//! Error types for the lunacal-calendar crate.

/// Error type for all fallible operations in the lunacal-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month index: {month_index} (must be 0..=11)")]
    InvalidMonthIndex {
        /// The invalid month index that was provided.
        month_index: u8,
    },

    /// Returned when a one-based month number is outside 1..=12.
    #[error("invalid month number: {month} (must be 1..=12)")]
    InvalidMonthNumber {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The year of the month.
        year: i32,
        /// The one-based month number.
        month: u8,
        /// The maximum valid day for the month.
        max_day: u8,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month_index() {
        let err = CalendarError::InvalidMonthIndex { month_index: 12 };
        assert_eq!(err.to_string(), "invalid month index: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_month_number() {
        let err = CalendarError::InvalidMonthNumber { month: 0 };
        assert_eq!(err.to_string(), "invalid month number: 0 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            year: 2023,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for 2023-02 (max 28)");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 300_000 };
        assert_eq!(err.to_string(), "year out of range: 300000");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
