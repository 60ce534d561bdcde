use chrono::{Datelike, Months, NaiveDate, Weekday};
use lunacal_calendar::{YearMonth, days_in_month, leading_padding, shift_month};

#[test]
fn forward_roundtrip_over_a_year() {
    // Twelve steps forward from any month lands on the same month next year.
    for m in 0..=11_u8 {
        let mut current = (2024, m);
        for _ in 0..12 {
            current = shift_month(current.0, current.1, 1).unwrap();
        }
        assert_eq!(current, (2025, m), "start month index {m}");
    }
}

#[test]
fn backward_roundtrip_over_a_year() {
    for m in 0..=11_u8 {
        let mut current = (2024, m);
        for _ in 0..12 {
            current = shift_month(current.0, current.1, -1).unwrap();
        }
        assert_eq!(current, (2023, m), "start month index {m}");
    }
}

#[test]
fn navigation_matches_chrono_month_arithmetic() {
    let mut ym = YearMonth::new(1999, 9).unwrap();
    let mut date = NaiveDate::from_ymd_opt(1999, 10, 1).unwrap();
    for _ in 0..40 {
        ym = ym.next().unwrap();
        date = date.checked_add_months(Months::new(1)).unwrap();
        assert_eq!(ym.year(), date.year());
        assert_eq!(u32::from(ym.month().get()), date.month0());
    }
}

#[test]
fn day_counts_match_chrono() {
    for year in [1900, 1999, 2000, 2023, 2024, 2100] {
        for m in 0..=11_u8 {
            let first = NaiveDate::from_ymd_opt(year, u32::from(m) + 1, 1).unwrap();
            let next = first.checked_add_months(Months::new(1)).unwrap();
            let expected = (next - first).num_days();
            assert_eq!(
                i64::from(days_in_month(year, m).unwrap()),
                expected,
                "{year}-{m}"
            );
        }
    }
}

#[test]
fn padding_always_within_a_week() {
    for year in 2020..=2030 {
        for m in 0..=11_u8 {
            for start in [Weekday::Sun, Weekday::Mon, Weekday::Sat] {
                let pad = leading_padding(year, m, start).unwrap();
                assert!(pad <= 6, "{year}-{m} {start:?}: {pad}");
            }
        }
    }
}

#[test]
fn padding_matches_first_weekday() {
    // Consecutive months: next padding = (padding + days) mod 7
    let mut ym = YearMonth::new(2023, 0).unwrap();
    for _ in 0..24 {
        let pad = ym.leading_padding(Weekday::Sun).unwrap();
        let next = ym.next().unwrap();
        let expected = (pad + ym.days_in_month()) % 7;
        assert_eq!(next.leading_padding(Weekday::Sun).unwrap(), expected, "{next}");
        ym = next;
    }
}
