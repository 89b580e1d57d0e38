//! Half-open date intervals and the granularities they are resolved at.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::CalendarError;

/// The unit at which a containing interval is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// A single calendar day, midnight to midnight.
    Day,
    /// A week beginning on the calendar's first weekday.
    Week,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

/// A half-open range `[start, end)` of instants.
///
/// The constructor guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateInterval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidInterval`] if `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive lower bound.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the exclusive upper bound.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns `true` if `date` lies in `[start, end)`.
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date < self.end
    }

    /// Returns `true` if the interval has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `end - start`.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
