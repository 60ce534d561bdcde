//! The month currently shown by a calendar, with navigation.

use chrono::NaiveDate;

use lunacal_calendar::YearMonth;
use lunacal_phase::MoonOracle;

use crate::clock::Clock;
use crate::config::GridConfig;
use crate::error::EngineError;
use crate::grid::{MonthGrid, build_grid_for};

/// Calendar navigation state.
///
/// Holds only the displayed month; grids are rebuilt in full on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    current: YearMonth,
    config: GridConfig,
}

impl CalendarView {
    /// Creates a view showing `month`.
    pub fn new(month: YearMonth, config: GridConfig) -> Self {
        Self {
            current: month,
            config,
        }
    }

    /// Creates a view showing the month that contains today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidUtcOffset`] if the configured offset is invalid.
    pub fn from_clock(clock: &dyn Clock, config: GridConfig) -> Result<Self, EngineError> {
        let today = local_today(clock, &config)?;
        Ok(Self::new(YearMonth::of_date(today), config))
    }

    /// Returns the displayed month.
    pub fn current(&self) -> YearMonth {
        self.current
    }

    /// Returns the grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Moves to the following month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Calendar`] if the year overflows; the view is
    /// left unchanged.
    pub fn next(&mut self) -> Result<YearMonth, EngineError> {
        self.current = self.current.next()?;
        Ok(self.current)
    }

    /// Moves to the preceding month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Calendar`] if the year underflows; the view is
    /// left unchanged.
    pub fn previous(&mut self) -> Result<YearMonth, EngineError> {
        self.current = self.current.previous()?;
        Ok(self.current)
    }

    /// Moves `delta` months forward or backward.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Calendar`] if the year overflows.
    pub fn shift(&mut self, delta: i32) -> Result<YearMonth, EngineError> {
        self.current = self.current.shift(delta)?;
        Ok(self.current)
    }

    /// Builds the grid for the displayed month.
    ///
    /// # Errors
    ///
    /// See [`build_month_grid`](crate::build_month_grid).
    pub fn grid<O>(&self, oracle: &O) -> Result<MonthGrid, EngineError>
    where
        O: MoonOracle + ?Sized,
    {
        build_grid_for(self.current, oracle, &self.config)
    }
}

/// Returns the current calendar date in the configured UTC offset.
///
/// # Errors
///
/// Returns [`EngineError::InvalidUtcOffset`] if the configured offset is invalid.
pub fn local_today(clock: &dyn Clock, config: &GridConfig) -> Result<NaiveDate, EngineError> {
    let offset = config.utc_offset()?;
    Ok(clock.now().with_timezone(&offset).date_naive())
}
