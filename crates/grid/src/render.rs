//! Cell rendering: the content-injection seam between grids and views.

use chrono::{Datelike, NaiveDateTime};

/// Produces the content of one grid cell.
///
/// Any `Fn(NaiveDateTime) -> T` is a renderer, so closures can be passed
/// directly:
///
/// ```
/// use almanac_grid::CellRenderer;
/// use chrono::{Datelike, NaiveDate};
///
/// let renderer = |date: chrono::NaiveDateTime| date.day();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(renderer.render(date), 9);
/// ```
pub trait CellRenderer {
    /// The renderable content of a cell.
    type Output;

    /// Renders the cell for `date`.
    fn render(&self, date: NaiveDateTime) -> Self::Output;
}

impl<F, T> CellRenderer for F
where
    F: Fn(NaiveDateTime) -> T,
{
    type Output = T;

    fn render(&self, date: NaiveDateTime) -> T {
        self(date)
    }
}

/// Renders the day of month, right-aligned to two columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayNumberRenderer;

impl CellRenderer for DayNumberRenderer {
    type Output = String;

    fn render(&self, date: NaiveDateTime) -> String {
        format!("{:>2}", date.day())
    }
}

/// Rendered content of one cell.
///
/// Filler days are still rendered, but flagged hidden so a view can keep
/// their slot in the grid without drawing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<T> {
    content: T,
    hidden: bool,
}

impl<T> Cell<T> {
    pub fn new(content: T, hidden: bool) -> Self {
        Self { content, hidden }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns `true` if the cell should be laid out but not drawn.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn day_number_is_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(DayNumberRenderer.render(date), " 7");
        assert_eq!(DayNumberRenderer.render(date.with_day(17).unwrap()), "17");
    }

    #[test]
    fn cell_accessors() {
        let cell = Cell::new("x", true);
        assert!(cell.is_hidden());
        assert_eq!(*cell.content(), "x");
        assert_eq!(cell.into_content(), "x");
    }
}
