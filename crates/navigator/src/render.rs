//! Render output handed to the presentation layer.

use almanac_grid::Cell;
use chrono::NaiveDateTime;

/// One month, ready to lay out.
///
/// `weeks` is empty when the month could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMonth<T> {
    month: NaiveDateTime,
    title: Option<String>,
    weekday_labels: [&'static str; 7],
    weeks: Vec<[Cell<T>; 7]>,
}

impl<T> RenderedMonth<T> {
    pub fn new(
        month: NaiveDateTime,
        title: Option<String>,
        weekday_labels: [&'static str; 7],
        weeks: Vec<[Cell<T>; 7]>,
    ) -> Self {
        Self {
            month,
            title,
            weekday_labels,
            weeks,
        }
    }

    pub fn month(&self) -> NaiveDateTime {
        self.month
    }

    /// Header title, present only when the header is shown.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn weekday_labels(&self) -> &[&'static str; 7] {
        &self.weekday_labels
    }

    pub fn weeks(&self) -> &[[Cell<T>; 7]] {
        &self.weeks
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
