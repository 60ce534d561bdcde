//! Plain-text rendering for terminal output.

use chrono::{FixedOffset, Month, NaiveDate};

use lunacal_engine::{CalendarSlot, FullMoonResult, MonthGrid};
use lunacal_phase::PhaseCategory;

const CELL_WIDTH: usize = 12;

/// Short label for a phase, sized to fit a grid cell.
pub fn phase_abbrev(phase: PhaseCategory) -> &'static str {
    match phase {
        PhaseCategory::New => "NM",
        PhaseCategory::WaxingCrescent => "WxC",
        PhaseCategory::FirstQuarter => "FQ",
        PhaseCategory::WaxingGibbous => "WxG",
        PhaseCategory::Full => "FM",
        PhaseCategory::WaningGibbous => "WnG",
        PhaseCategory::LastQuarter => "LQ",
        PhaseCategory::WaningCrescent => "WnC",
    }
}

/// Renders a month grid as seven columns with a title, weekday header and legend.
///
/// Each populated cell shows the day number, the phase label and the
/// illumination percent. The cell for `today` is marked with `*`.
pub fn render_grid(grid: &MonthGrid, today: Option<NaiveDate>) -> String {
    let mut out = String::new();

    let month_name = Month::try_from(grid.month_index().number())
        .map(|m| m.name())
        .unwrap_or("?");
    let title = format!("{month_name} {}", grid.year());
    let total_width = CELL_WIDTH * 7 + 6;
    out.push_str(&format!("{title:^total_width$}\n"));

    let mut weekday = grid.week_start();
    let mut header = Vec::with_capacity(7);
    for _ in 0..7 {
        header.push(format!("{:<CELL_WIDTH$}", weekday.to_string()));
        weekday = weekday.succ();
    }
    out.push_str(header.join(" ").trim_end());
    out.push('\n');

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                CalendarSlot::Empty => " ".repeat(CELL_WIDTH),
                CalendarSlot::Day(day) => {
                    let mark = match today {
                        Some(t) if grid.is_today(day.day, t) => '*',
                        _ => ' ',
                    };
                    format!(
                        "{:>2}{mark} {:<3} {:>3.0}%",
                        day.day,
                        phase_abbrev(day.category()),
                        day.illumination_percent,
                    )
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }

    out.push('\n');
    let legend: Vec<String> = PhaseCategory::ALL
        .iter()
        .map(|p| format!("{}={}", phase_abbrev(*p), p.key()))
        .collect();
    out.push_str(&legend.join("  "));
    out.push('\n');
    out
}

/// Renders a full-moon search result as a single line, in the given local offset.
pub fn render_full_moon(result: &FullMoonResult, horizon_days: u32, offset: FixedOffset) -> String {
    match (result.date(), result.sample()) {
        (Some(date), sample) => {
            let local = date.with_timezone(&offset);
            let when = match result.days_until() {
                0 => "today".to_string(),
                1 => "in 1 day".to_string(),
                n => format!("in {n} days"),
            };
            match sample {
                Some(s) => format!(
                    "Next full moon: {} ({when}, {:.1}% illuminated)",
                    local.format("%A, %-d %B %Y"),
                    s.percent(),
                ),
                None => format!("Next full moon: {} ({when})", local.format("%A, %-d %B %Y")),
            }
        }
        (None, _) => format!("Next full moon: unknown (none within {horizon_days} days)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use lunacal_engine::{GridConfig, LocatorConfig, build_month_grid, find_next_full_moon};
    use lunacal_phase::{IlluminationSample, OracleError};

    fn always_full(at: DateTime<Utc>) -> Result<IlluminationSample, OracleError> {
        IlluminationSample::new(1.0, 0.5).map_err(|e| OracleError::new(at, e.to_string()))
    }

    fn always_new(at: DateTime<Utc>) -> Result<IlluminationSample, OracleError> {
        IlluminationSample::new(0.0, 0.0).map_err(|e| OracleError::new(at, e.to_string()))
    }

    #[test]
    fn grid_has_title_header_and_six_rows() {
        // March 2024 starts on a Friday: 5 blanks + 31 days = 6 rows
        let grid = build_month_grid(2024, 2, &always_full, &GridConfig::new()).unwrap();
        let text = render_grid(&grid, None);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("March 2024"));
        assert!(lines[1].starts_with("Sun"));
        assert!(lines[1].trim_end().ends_with("Sat"));
        assert!(lines[2].trim_start().starts_with("1  FM  100%"));
        assert!(lines[7].trim_start().starts_with("31  FM  100%"));
        assert!(text.contains("FM=full"));
    }

    #[test]
    fn grid_lines_are_newline_terminated() {
        // February 2026 starts on a Sunday: exactly four rows
        let grid = build_month_grid(2026, 1, &always_new, &GridConfig::new()).unwrap();
        let text = render_grid(&grid, None);
        assert!(text.ends_with("NM=new  WxC=waxing_crescent  FQ=first_quarter  WxG=waxing_gibbous  \
             FM=full  WnG=waning_gibbous  LQ=last_quarter  WnC=waning_crescent\n"));
        // title + header + 4 weeks + blank + legend
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(6), Some(""));
    }

    #[test]
    fn today_is_marked() {
        let grid = build_month_grid(2024, 2, &always_new, &GridConfig::new()).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let text = render_grid(&grid, Some(today));
        assert!(text.contains("15* NM"));
        assert_eq!(text.matches('*').count(), 1);

        let elsewhere = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        assert!(!render_grid(&grid, Some(elsewhere)).contains('*'));
    }

    #[test]
    fn full_moon_lines() {
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();

        let found = find_next_full_moon(now, &always_full, &LocatorConfig::new()).unwrap();
        assert_eq!(
            render_full_moon(&found, 60, utc),
            "Next full moon: Saturday, 10 February 2024 (today, 100.0% illuminated)"
        );

        let missing = find_next_full_moon(now, &always_new, &LocatorConfig::new()).unwrap();
        assert_eq!(
            render_full_moon(&missing, 60, utc),
            "Next full moon: unknown (none within 60 days)"
        );
    }
}
