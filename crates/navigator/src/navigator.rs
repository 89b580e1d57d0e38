//! Month navigation: buttons, jump-to-today, and swipe paging.

use std::fmt;

use almanac_calendar::CalendarSystem;
use almanac_grid::{CellRenderer, MonthGrid, month_title, weekday_labels};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::render::RenderedMonth;
use crate::state::{DragDelta, NavState};

type MonthChanged = Box<dyn FnMut(NaiveDateTime)>;

/// What a finished drag gesture did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Dragged right past the threshold; now showing this month.
    Previous(NaiveDateTime),
    /// Dragged left past the threshold; now showing this month.
    Next(NaiveDateTime),
    /// Below the threshold; nothing changed.
    Cancelled,
}

/// Drives month navigation over caller-owned [`NavState`].
///
/// The navigator owns the calendar system, the clock used by
/// [`today`](Self::today), and the single month-changed subscriber. Every
/// committed transition calls the subscriber before the operation returns.
/// Failed transitions leave the displayed month untouched and notify no one.
///
/// # Example
///
/// ```
/// use almanac_calendar::GregorianCalendar;
/// use almanac_navigator::{CalendarNavigator, DragDelta, GestureOutcome, NavigatorConfig};
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let config = NavigatorConfig::new().with_initial_month(march);
/// let mut nav = CalendarNavigator::new(GregorianCalendar::default(), config).unwrap();
///
/// let mut state = nav.initial_state();
/// let outcome = nav.on_drag_ended(&mut state, DragDelta::horizontal(-150.0)).unwrap();
/// assert!(matches!(outcome, GestureOutcome::Next(_)));
/// ```
pub struct CalendarNavigator<C, K = SystemClock> {
    calendar: C,
    clock: K,
    config: NavigatorConfig,
    on_month_change: Option<MonthChanged>,
}

impl<C: CalendarSystem> CalendarNavigator<C, SystemClock> {
    /// Creates a navigator reading "now" from the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::InvalidThreshold`] if `config` does not
    /// validate.
    pub fn new(calendar: C, config: NavigatorConfig) -> Result<Self, NavigatorError> {
        config.validate()?;
        Ok(Self {
            calendar,
            clock: SystemClock,
            config,
            on_month_change: None,
        })
    }
}

impl<C: CalendarSystem, K: Clock> CalendarNavigator<C, K> {
    /// Replaces the clock used for [`today`](Self::today) and the default
    /// initial month.
    pub fn with_clock<K2: Clock>(self, clock: K2) -> CalendarNavigator<C, K2> {
        CalendarNavigator {
            calendar: self.calendar,
            clock,
            config: self.config,
            on_month_change: self.on_month_change,
        }
    }

    /// Registers the month-changed subscriber, replacing any previous one.
    pub fn on_month_change(mut self, action: impl FnMut(NaiveDateTime) + 'static) -> Self {
        self.on_month_change = Some(Box::new(action));
        self
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// State for a freshly mounted view: the configured initial month, or
    /// the month containing "now".
    pub fn initial_state(&self) -> NavState {
        NavState::new(self.config.initial_month().unwrap_or_else(|| self.clock.now()))
    }

    /// Shows the month before the current one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`](almanac_calendar::CalendarError)
    /// (wrapped) if the month cannot be represented.
    pub fn previous(&mut self, state: &mut NavState) -> Result<NaiveDateTime, NavigatorError> {
        self.shift(state, -1)
    }

    /// Shows the month after the current one.
    ///
    /// # Errors
    ///
    /// See [`previous`](Self::previous).
    pub fn next(&mut self, state: &mut NavState) -> Result<NaiveDateTime, NavigatorError> {
        self.shift(state, 1)
    }

    /// Shows the month containing "now" and notifies, even if that month is
    /// already displayed.
    pub fn today(&mut self, state: &mut NavState) -> NaiveDateTime {
        let now = self.clock.now();
        self.commit(state, now);
        now
    }

    /// Records the in-flight drag translation. Never navigates.
    pub fn on_drag_changed(&self, state: &mut NavState, delta: DragDelta) {
        state.set_drag(delta);
    }

    /// Finishes a drag gesture.
    ///
    /// A rightward drag past the threshold pages to the previous month, a
    /// leftward one to the next month, anything shorter is discarded. The
    /// pending offset is cleared in every case.
    ///
    /// # Errors
    ///
    /// Propagates overflow from [`previous`](Self::previous) or
    /// [`next`](Self::next).
    pub fn on_drag_ended(
        &mut self,
        state: &mut NavState,
        delta: DragDelta,
    ) -> Result<GestureOutcome, NavigatorError> {
        state.reset_drag();
        let threshold = self.config.gesture_threshold();
        if delta.horizontal > threshold {
            self.previous(state).map(GestureOutcome::Previous)
        } else if delta.horizontal < -threshold {
            self.next(state).map(GestureOutcome::Next)
        } else {
            debug!(horizontal = delta.horizontal, threshold, "drag below threshold");
            Ok(GestureOutcome::Cancelled)
        }
    }

    /// Resolves the grid of the displayed month.
    pub fn grid(&self, state: &NavState) -> Result<MonthGrid, NavigatorError> {
        Ok(MonthGrid::new(state.month(), &self.calendar)?)
    }

    /// Renders the displayed month with `renderer`.
    ///
    /// A month the calendar cannot resolve renders as an empty grid; the
    /// failure is logged rather than returned so a view never shows a
    /// partial month.
    pub fn render<R>(&self, state: &NavState, renderer: &R) -> RenderedMonth<R::Output>
    where
        R: CellRenderer + ?Sized,
    {
        let month = state.month();
        let title = self
            .config
            .show_header()
            .then(|| month_title(&self.calendar, month));
        let weeks = match MonthGrid::new(month, &self.calendar) {
            Ok(grid) => grid.render(renderer),
            Err(e) => {
                warn!(%month, error = %e, "month grid unavailable, rendering empty");
                Vec::new()
            }
        };
        RenderedMonth::new(
            month,
            title,
            weekday_labels(self.calendar.first_weekday()),
            weeks,
        )
    }

    fn shift(&mut self, state: &mut NavState, months: i32) -> Result<NaiveDateTime, NavigatorError> {
        let target = self.calendar.checked_add_months(state.month(), months)?;
        self.commit(state, target);
        Ok(target)
    }

    fn commit(&mut self, state: &mut NavState, month: NaiveDateTime) {
        debug!(from = %state.month(), to = %month, "month changed");
        state.set_month(month);
        if let Some(action) = self.on_month_change.as_mut() {
            action(month);
        }
    }
}

impl<C: fmt::Debug, K: fmt::Debug> fmt::Debug for CalendarNavigator<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarNavigator")
            .field("calendar", &self.calendar)
            .field("clock", &self.clock)
            .field("config", &self.config)
            .field("subscribed", &self.on_month_change.is_some())
            .finish()
    }
}
