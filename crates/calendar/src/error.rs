//! Error types for the almanac-calendar crate.

use chrono::NaiveDateTime;

use crate::interval::Granularity;

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Every variant describes a deterministic failure of well-formed input:
/// either the calendar system could not answer a question, or date
/// arithmetic left the representable range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the calendar system cannot resolve the interval of the
    /// requested granularity that contains `date`.
    #[error("calendar cannot resolve the {granularity} containing {date}")]
    Configuration {
        /// Granularity that was requested.
        granularity: Granularity,
        /// Date whose containing interval was requested.
        date: NaiveDateTime,
    },

    /// Returned when month arithmetic produces a non-representable date.
    #[error("adding {months} month(s) to {date} leaves the representable date range")]
    DateOverflow {
        /// Date the arithmetic started from.
        date: NaiveDateTime,
        /// Signed number of months that was added.
        months: i32,
    },

    /// Returned when an interval would start after it ends.
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// Requested start.
        start: NaiveDateTime,
        /// Requested end.
        end: NaiveDateTime,
    },

    /// Returned when a resolved week does not contain exactly seven days.
    #[error("week starting {start} has {len} day(s) (expected 7)")]
    IncompleteWeek {
        /// First instant of the offending week.
        start: NaiveDateTime,
        /// Number of days the calendar produced.
        len: usize,
    },
}
