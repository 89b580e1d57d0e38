//! The calendar capability consumed by grids and navigators.

use chrono::{NaiveDateTime, Weekday};

use crate::error::CalendarError;
use crate::interval::{DateInterval, Granularity};
use crate::pattern::RecurrencePattern;

/// A date component that can be extracted from an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Proleptic year, may be zero or negative.
    Year,
    /// 1..=12
    Month,
    /// 1..=31
    Day,
    /// 1 (Sunday) ..= 7 (Saturday)
    Weekday,
    /// 0..=23
    Hour,
    /// 0..=59
    Minute,
    /// 0..=59
    Second,
}

/// A calendar system: week layout, interval resolution, date arithmetic,
/// and recurrence stepping.
///
/// Grids and navigators only ever talk to dates through this trait, so a
/// host can inject any calendar (a different first weekday, a test double
/// that refuses to resolve intervals) without touching the layout logic.
pub trait CalendarSystem {
    /// The weekday every week begins on.
    fn first_weekday(&self) -> Weekday;

    /// Returns the interval of `granularity` that contains `date`, or `None`
    /// if the calendar cannot resolve it.
    fn containing_interval(
        &self,
        granularity: Granularity,
        date: NaiveDateTime,
    ) -> Option<DateInterval>;

    /// Returns the first instant strictly after `after` that matches
    /// `pattern`, or `None` if there is none the calendar can represent.
    fn next_matching(
        &self,
        after: NaiveDateTime,
        pattern: &RecurrencePattern,
    ) -> Option<NaiveDateTime>;

    /// Adds `delta` months, clamping the day to the target month's length.
    /// Returns `None` on overflow.
    fn add_months(&self, date: NaiveDateTime, delta: i32) -> Option<NaiveDateTime>;

    /// Adds `delta` days. Returns `None` on overflow.
    fn add_days(&self, date: NaiveDateTime, delta: i64) -> Option<NaiveDateTime>;

    /// Extracts a single component of `date`.
    fn component(&self, unit: Component, date: NaiveDateTime) -> i32;

    /// Like [`containing_interval`](Self::containing_interval), but reports
    /// an unresolvable interval as [`CalendarError::Configuration`].
    fn interval_of(
        &self,
        granularity: Granularity,
        date: NaiveDateTime,
    ) -> Result<DateInterval, CalendarError> {
        self.containing_interval(granularity, date)
            .ok_or(CalendarError::Configuration { granularity, date })
    }

    /// Returns `true` if `a` and `b` fall in the same interval of
    /// `granularity`.
    fn is_same(&self, granularity: Granularity, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        self.containing_interval(granularity, a)
            .is_some_and(|iv| iv.contains(b))
    }

    /// Like [`add_months`](Self::add_months), but reports overflow as
    /// [`CalendarError::DateOverflow`].
    fn checked_add_months(
        &self,
        date: NaiveDateTime,
        months: i32,
    ) -> Result<NaiveDateTime, CalendarError> {
        self.add_months(date, months)
            .ok_or(CalendarError::DateOverflow { date, months })
    }
}
