//! Caller-owned navigation state.

use chrono::NaiveDateTime;

/// Cumulative drag translation reported by a gesture recognizer.
///
/// Positive `horizontal` is a drag to the right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub horizontal: f64,
    pub vertical: f64,
}

impl DragDelta {
    pub const ZERO: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };

    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// A purely horizontal drag.
    pub fn horizontal(horizontal: f64) -> Self {
        Self::new(horizontal, 0.0)
    }
}

/// State of one displayed month: the current month and the pending drag.
///
/// Created when a view mounts and mutated only through
/// [`CalendarNavigator`](crate::CalendarNavigator) operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    month: NaiveDateTime,
    drag: DragDelta,
}

impl NavState {
    /// Creates state showing the month containing `month`.
    pub fn new(month: NaiveDateTime) -> Self {
        Self {
            month,
            drag: DragDelta::ZERO,
        }
    }

    /// Returns a date inside the displayed month.
    pub fn month(&self) -> NaiveDateTime {
        self.month
    }

    /// Returns the in-flight drag translation; zero when no gesture is active.
    pub fn drag_offset(&self) -> DragDelta {
        self.drag
    }

    pub(crate) fn set_month(&mut self, month: NaiveDateTime) {
        self.month = month;
    }

    pub(crate) fn set_drag(&mut self, drag: DragDelta) {
        self.drag = drag;
    }

    pub(crate) fn reset_drag(&mut self) {
        self.drag = DragDelta::ZERO;
    }
}
