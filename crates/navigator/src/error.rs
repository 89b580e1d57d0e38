//! Error types for the almanac-navigator crate.

use almanac_calendar::CalendarError;

/// Error type for navigation and view operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigatorError {
    /// Error from the calendar system (unresolvable interval, overflow).
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when the gesture threshold is not finite and positive.
    #[error("gesture threshold must be finite and positive, got {value}")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },

    /// Returned when a calendar view is addressed with a month index it does
    /// not hold.
    #[error("month index {index} out of range (view holds {len} months)")]
    MonthOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of months in the view.
        len: usize,
    },
}
