//! Multi-month calendar views.

use almanac_calendar::{CalendarSystem, DateInterval, RecurrencePattern, generate_dates};
use almanac_grid::CellRenderer;
use chrono::NaiveDateTime;
use tracing::info;

use crate::clock::Clock;
use crate::error::NavigatorError;
use crate::navigator::{CalendarNavigator, GestureOutcome};
use crate::render::RenderedMonth;
use crate::state::{DragDelta, NavState};

/// A stack of month views covering a top-level interval.
///
/// The interval is split into months (its start, then every first of the
/// month inside it). Each month keeps its own [`NavState`], so paging one
/// month leaves the others where they are, while every transition reaches
/// the navigator's single subscriber.
#[derive(Debug)]
pub struct CalendarView<C, K> {
    navigator: CalendarNavigator<C, K>,
    interval: DateInterval,
    months: Vec<NavState>,
}

impl<C: CalendarSystem, K: Clock> CalendarView<C, K> {
    /// Builds one month view per month of `interval`.
    pub fn new(navigator: CalendarNavigator<C, K>, interval: DateInterval) -> Self {
        let months: Vec<NavState> = generate_dates(
            navigator.calendar(),
            interval,
            RecurrencePattern::first_of_month(),
        )
        .map(NavState::new)
        .collect();
        info!(
            start = %interval.start(),
            end = %interval.end(),
            n_months = months.len(),
            "calendar view built"
        );
        Self {
            navigator,
            interval,
            months,
        }
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn navigator(&self) -> &CalendarNavigator<C, K> {
        &self.navigator
    }

    /// Returns the state of every month view, top to bottom.
    pub fn months(&self) -> &[NavState] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Pages month view `index` back by one month.
    pub fn previous(&mut self, index: usize) -> Result<NaiveDateTime, NavigatorError> {
        let state = Self::slot(&mut self.months, index)?;
        self.navigator.previous(state)
    }

    /// Pages month view `index` forward by one month.
    pub fn next(&mut self, index: usize) -> Result<NaiveDateTime, NavigatorError> {
        let state = Self::slot(&mut self.months, index)?;
        self.navigator.next(state)
    }

    /// Jumps month view `index` to the month containing "now".
    pub fn today(&mut self, index: usize) -> Result<NaiveDateTime, NavigatorError> {
        let state = Self::slot(&mut self.months, index)?;
        Ok(self.navigator.today(state))
    }

    pub fn drag_changed(&mut self, index: usize, delta: DragDelta) -> Result<(), NavigatorError> {
        let state = Self::slot(&mut self.months, index)?;
        self.navigator.on_drag_changed(state, delta);
        Ok(())
    }

    pub fn drag_ended(
        &mut self,
        index: usize,
        delta: DragDelta,
    ) -> Result<GestureOutcome, NavigatorError> {
        let state = Self::slot(&mut self.months, index)?;
        self.navigator.on_drag_ended(state, delta)
    }

    /// Renders month view `index`.
    pub fn render<R>(
        &self,
        index: usize,
        renderer: &R,
    ) -> Result<RenderedMonth<R::Output>, NavigatorError>
    where
        R: CellRenderer + ?Sized,
    {
        let state = self
            .months
            .get(index)
            .ok_or(NavigatorError::MonthOutOfRange {
                index,
                len: self.months.len(),
            })?;
        Ok(self.navigator.render(state, renderer))
    }

    /// Renders every month view, top to bottom.
    pub fn render_all<R>(&self, renderer: &R) -> Vec<RenderedMonth<R::Output>>
    where
        R: CellRenderer + ?Sized,
    {
        self.months
            .iter()
            .map(|state| self.navigator.render(state, renderer))
            .collect()
    }

    fn slot(months: &mut [NavState], index: usize) -> Result<&mut NavState, NavigatorError> {
        let len = months.len();
        months
            .get_mut(index)
            .ok_or(NavigatorError::MonthOutOfRange { index, len })
    }
}
