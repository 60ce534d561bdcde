//! Calendar command: build and print one month of daily moon phases.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunacal_calendar::{MonthIndex, YearMonth};
use lunacal_engine::{CalendarView, local_today};
use lunacal_ephemeris::SunCalcOracle;

use crate::cli::CalendarArgs;
use crate::config::LunacalConfig;
use crate::{convert, render};

/// Run the month grid command.
pub fn run(args: CalendarArgs, config: &LunacalConfig) -> Result<()> {
    let _cmd = info_span!("calendar").entered();

    let grid_cfg = convert::build_grid_config(
        &config.calendar,
        args.week_start.as_deref(),
        args.utc_offset_minutes,
    )?;
    let clock = convert::clock_for(args.now);
    let today = local_today(clock.as_ref(), &grid_cfg)?;

    // Missing year or month falls back to today's.
    let this_month = YearMonth::of_date(today);
    let year = args.year.unwrap_or(this_month.year());
    let month = match args.month {
        Some(number) => MonthIndex::from_number(number)?,
        None => this_month.month(),
    };
    let mut view = CalendarView::new(YearMonth::from_parts(year, month), grid_cfg);
    if args.shift != 0 {
        view.shift(args.shift)
            .with_context(|| format!("cannot shift {} by {} months", view.current(), args.shift))?;
    }

    info!(month = %view.current(), "building month grid");
    let grid = view
        .grid(&SunCalcOracle)
        .with_context(|| format!("failed to build grid for {}", view.current()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialize grid")?;
        println!("{json}");
    } else {
        print!("{}", render::render_grid(&grid, Some(today)));
    }
    Ok(())
}
