//! Header title and weekday column labels.

use almanac_calendar::{CalendarSystem, Component};
use chrono::{NaiveDateTime, Weekday};

const SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Returns the seven short weekday names rotated to begin at `first`.
///
/// Pass the same `CalendarSystem::first_weekday` the grid was built with so
/// the header columns line up with the day columns.
pub fn weekday_labels(first: Weekday) -> [&'static str; 7] {
    let offset = first.num_days_from_sunday() as usize;
    std::array::from_fn(|i| SHORT_NAMES[(offset + i) % 7])
}

/// Header title of the month containing `month`, `"{year}/{month}"`.
pub fn month_title<C>(calendar: &C, month: NaiveDateTime) -> String
where
    C: CalendarSystem + ?Sized,
{
    format!(
        "{}/{}",
        calendar.component(Component::Year, month),
        calendar.component(Component::Month, month)
    )
}
