//! Week-aligned month grids annotated with lunar data.

use chrono::{Datelike, DateTime, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use serde::Serialize;
use tracing::{debug, trace};

use lunacal_calendar::{MonthIndex, YearMonth};
use lunacal_phase::{MoonOracle, PhaseCategory, Shading, classify, illumination_percent};

use crate::config::GridConfig;
use crate::error::EngineError;

/// Local hour at which every calendar day is sampled.
pub const SAMPLE_HOUR: u32 = 12;

/// Lunar data for one day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySlot {
    /// Day of the month (1..=31).
    pub day: u8,
    /// Illuminated percent of the disc, rounded to one decimal.
    pub illumination_percent: f64,
    /// Raw phase age at local midday.
    pub phase_age: f64,
}

impl DaySlot {
    /// Classifies this day.
    pub fn category(&self) -> PhaseCategory {
        classify(self.illumination_percent, self.phase_age)
    }

    /// Returns the shadow overlay for drawing this day's disc.
    pub fn shading(&self) -> Shading {
        Shading::new(self.illumination_percent, self.phase_age)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarSlot {
    /// Alignment cell before day 1.
    Empty,
    /// A day of the month.
    Day(DaySlot),
}

impl CalendarSlot {
    /// Returns the day data, or `None` for padding.
    pub fn as_day(&self) -> Option<&DaySlot> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }

    /// Returns `true` for padding cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A month laid out for a seven-column calendar.
///
/// `slots` holds `leading_padding` empty cells followed by one cell per day
/// of the month. No trailing padding is added; renderers complete the last
/// row themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month_index: MonthIndex,
    week_start: Weekday,
    leading_padding: u8,
    slots: Vec<CalendarSlot>,
}

impl MonthGrid {
    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index.
    pub fn month_index(&self) -> MonthIndex {
        self.month_index
    }

    /// Returns the month as a [`YearMonth`].
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month_index)
    }

    /// Returns the weekday of the first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the number of empty cells before day 1 (0..=6).
    pub fn leading_padding(&self) -> u8 {
        self.leading_padding
    }

    /// Returns every cell in display order.
    pub fn slots(&self) -> &[CalendarSlot] {
        &self.slots
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> usize {
        self.slots.len() - usize::from(self.leading_padding)
    }

    /// Iterates over the populated cells.
    pub fn days(&self) -> impl Iterator<Item = &DaySlot> {
        self.slots.iter().filter_map(CalendarSlot::as_day)
    }

    /// Returns the data for `day` of the month.
    pub fn day(&self, day: u8) -> Option<&DaySlot> {
        self.slot_index_of(day)
            .and_then(|i| self.slots.get(i))
            .and_then(CalendarSlot::as_day)
    }

    /// Returns the cell index of `day`, or `None` if the month has no such day.
    pub fn slot_index_of(&self, day: u8) -> Option<usize> {
        if day == 0 || usize::from(day) > self.days_in_month() {
            return None;
        }
        Some(usize::from(self.leading_padding) + usize::from(day) - 1)
    }

    /// Returns `true` if `day` of this grid is `today`.
    pub fn is_today(&self, day: u8, today: NaiveDate) -> bool {
        self.year_month().contains(today) && today.day() == u32::from(day)
    }

    /// Splits the cells into rows of seven; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarSlot]> {
        self.slots.chunks(7)
    }
}

/// Returns the instant of local midday on `date`.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the instant cannot be represented.
pub fn midday(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, EngineError> {
    date.and_hms_opt(SAMPLE_HOUR, 0, 0)
        .and_then(|local| offset.from_local_datetime(&local).single())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(EngineError::DateOutOfRange { date })
}

/// Builds the grid for a year and zero-based month index.
///
/// # Errors
///
/// Returns [`EngineError::Calendar`] if `month_index` is not in 0..=11
/// (it is never wrapped), [`EngineError::InvalidUtcOffset`] for a bad
/// configuration, and [`EngineError::Oracle`] if any day fails to sample.
/// A failure for any day fails the whole grid.
pub fn build_month_grid<O>(
    year: i32,
    month_index: u8,
    oracle: &O,
    config: &GridConfig,
) -> Result<MonthGrid, EngineError>
where
    O: MoonOracle + ?Sized,
{
    let month = YearMonth::new(year, month_index)?;
    build_grid_for(month, oracle, config)
}

/// Builds the grid for an already-validated [`YearMonth`].
///
/// # Errors
///
/// See [`build_month_grid`].
#[tracing::instrument(skip(oracle, config), fields(month = %month, week_start = ?config.week_start()))]
pub fn build_grid_for<O>(
    month: YearMonth,
    oracle: &O,
    config: &GridConfig,
) -> Result<MonthGrid, EngineError>
where
    O: MoonOracle + ?Sized,
{
    let offset = config.utc_offset()?;
    let leading_padding = month.leading_padding(config.week_start())?;
    let n_days = month.days_in_month();

    let mut slots = Vec::with_capacity(usize::from(leading_padding) + usize::from(n_days));
    slots.extend((0..leading_padding).map(|_| CalendarSlot::Empty));

    for day in 1..=n_days {
        let at = midday(month.date(day)?, offset)?;
        let sample = oracle.sample(at)?;
        trace!(day, phase_age = sample.phase_age(), "sampled");
        slots.push(CalendarSlot::Day(DaySlot {
            day,
            illumination_percent: illumination_percent(sample.illuminated_fraction()),
            phase_age: sample.phase_age(),
        }));
    }

    debug!(leading_padding, n_days, "month grid built");
    Ok(MonthGrid {
        year: month.year(),
        month_index: month.month(),
        week_start: config.week_start(),
        leading_padding,
        slots,
    })
}
