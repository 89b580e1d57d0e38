//! Month grids: the weeks overlapping a month, padded to whole weeks.

use almanac_calendar::{
    CalendarError, CalendarSystem, DateInterval, Granularity, RecurrencePattern, generate_dates,
};
use chrono::{NaiveDateTime, Weekday};
use tracing::debug;

use crate::labels::{month_title, weekday_labels};
use crate::render::{Cell, CellRenderer};
use crate::week::{GridDay, Week};

/// Computes the weeks displayed for the month containing `month`.
///
/// Week starts are the month's first instant plus every first-weekday
/// midnight inside the month. Each week is then expanded to its seven
/// midnights; days outside the month are kept as filler.
///
/// # Errors
///
/// Returns [`CalendarError::Configuration`] if the calendar cannot resolve
/// the month or one of its weeks, and [`CalendarError::IncompleteWeek`] if a
/// resolved week does not hold exactly seven days.
#[tracing::instrument(level = "debug", skip(calendar))]
pub fn weeks_for<C>(month: NaiveDateTime, calendar: &C) -> Result<Vec<Week>, CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let month_interval = calendar.interval_of(Granularity::Month, month)?;
    let pattern = RecurrencePattern::week_start(calendar.first_weekday());
    let weeks = generate_dates(calendar, month_interval, pattern)
        .map(|week_start| build_week(calendar, month, week_start))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(n_weeks = weeks.len(), "month grid resolved");
    Ok(weeks)
}

fn build_week<C>(
    calendar: &C,
    month: NaiveDateTime,
    week_start: NaiveDateTime,
) -> Result<Week, CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let week_interval = calendar.interval_of(Granularity::Week, week_start)?;
    let days: Vec<GridDay> =
        generate_dates(calendar, week_interval, RecurrencePattern::midnight())
            .map(|date| GridDay::new(date, calendar.is_same(Granularity::Month, month, date)))
            .collect();
    let len = days.len();
    let days: [GridDay; 7] = days.try_into().map_err(|_| CalendarError::IncompleteWeek {
        start: week_interval.start(),
        len,
    })?;
    Ok(Week::new(days))
}

/// The resolved grid of one displayed month.
///
/// # Example
///
/// ```
/// use almanac_calendar::GregorianCalendar;
/// use almanac_grid::MonthGrid;
/// use chrono::{NaiveDate, Weekday};
///
/// let cal = GregorianCalendar::new(Weekday::Sun);
/// let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let grid = MonthGrid::new(march, &cal).unwrap();
/// assert_eq!(grid.weeks().len(), 6);
/// assert_eq!(grid.title(), "2024/3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDateTime,
    interval: DateInterval,
    first_weekday: Weekday,
    title: String,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `month`.
    ///
    /// # Errors
    ///
    /// See [`weeks_for`].
    pub fn new<C>(month: NaiveDateTime, calendar: &C) -> Result<Self, CalendarError>
    where
        C: CalendarSystem + ?Sized,
    {
        let interval = calendar.interval_of(Granularity::Month, month)?;
        let weeks = weeks_for(month, calendar)?;
        Ok(Self {
            month,
            interval,
            first_weekday: calendar.first_weekday(),
            title: month_title(calendar, month),
            weeks,
        })
    }

    /// Returns the date the grid was built for.
    pub fn month(&self) -> NaiveDateTime {
        self.month
    }

    /// Returns the month-granularity interval the grid covers.
    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Iterates every cell of the grid, row by row.
    pub fn days(&self) -> impl Iterator<Item = GridDay> + '_ {
        self.weeks.iter().flat_map(|w| w.days().iter().copied())
    }

    /// Header title, `"{year}/{month}"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Column labels aligned with the grid's first weekday.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(self.first_weekday)
    }

    /// Renders every cell once, row by row. Filler cells come back hidden.
    pub fn render<R>(&self, renderer: &R) -> Vec<[Cell<R::Output>; 7]>
    where
        R: CellRenderer + ?Sized,
    {
        self.weeks
            .iter()
            .map(|week| {
                let days: [GridDay; 7] = *week.days();
                days.map(|day| Cell::new(renderer.render(day.date()), day.is_filler()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::GregorianCalendar;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn february_2015_fits_four_weeks() {
        // Feb 1 2015 is a Sunday and the month has 28 days.
        let cal = GregorianCalendar::new(Weekday::Sun);
        let weeks = weeks_for(at(2015, 2, 10), &cal).unwrap();
        assert_eq!(weeks.len(), 4);
        assert!(weeks.iter().all(|w| w.filler_count() == 0));
    }

    #[test]
    fn week_starts_on_first_weekday() {
        for first in [Weekday::Sun, Weekday::Mon, Weekday::Thu] {
            let cal = GregorianCalendar::new(first);
            for week in weeks_for(at(2024, 3, 1), &cal).unwrap() {
                use chrono::Datelike;
                assert_eq!(week.start().weekday(), first);
            }
        }
    }

    #[test]
    fn title_and_labels() {
        let cal = GregorianCalendar::new(Weekday::Mon);
        let grid = MonthGrid::new(at(2024, 11, 20), &cal).unwrap();
        assert_eq!(grid.title(), "2024/11");
        assert_eq!(grid.weekday_labels()[0], "Mon");
        assert_eq!(grid.interval().start(), at(2024, 11, 1));
        assert_eq!(grid.interval().end(), at(2024, 12, 1));
        assert_eq!(grid.month(), at(2024, 11, 20));
    }

    #[test]
    fn render_hides_filler_cells() {
        let cal = GregorianCalendar::new(Weekday::Sun);
        let grid = MonthGrid::new(at(2024, 3, 1), &cal).unwrap();
        let rows = grid.render(&|date: NaiveDateTime| date);
        assert_eq!(rows.len(), 6);
        // Feb 25..=29 hidden, Mar 1..=2 visible.
        assert!(rows[0][..5].iter().all(|c| c.is_hidden()));
        assert!(rows[0][5..].iter().all(|c| !c.is_hidden()));
        assert_eq!(*rows[0][0].content(), at(2024, 2, 25));
    }
}
