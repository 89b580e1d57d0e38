//! Proleptic Gregorian calendar backed by `chrono`.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::interval::{DateInterval, Granularity};
use crate::pattern::RecurrencePattern;
use crate::system::{CalendarSystem, Component};

/// How far [`GregorianCalendar::next_matching`] scans before giving up.
///
/// February 29 can be eight years away (1896 -> 1904), so nine years of days
/// covers every satisfiable date pattern.
const SEARCH_HORIZON_DAYS: u32 = 9 * 366;

/// The proleptic Gregorian calendar with a configurable first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar {
    first_weekday: Weekday,
}

impl GregorianCalendar {
    /// Creates a calendar whose weeks start on `first_weekday`.
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    fn week_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        let offset = (7 + date.weekday().num_days_from_sunday()
            - self.first_weekday.num_days_from_sunday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
    }
}

impl Default for GregorianCalendar {
    /// Sunday-first weeks.
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl CalendarSystem for GregorianCalendar {
    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn containing_interval(
        &self,
        granularity: Granularity,
        date: NaiveDateTime,
    ) -> Option<DateInterval> {
        let day = date.date();
        let (start, end) = match granularity {
            Granularity::Day => (day, day.checked_add_days(Days::new(1))?),
            Granularity::Week => {
                let start = self.week_start(day)?;
                (start, start.checked_add_days(Days::new(7))?)
            }
            Granularity::Month => {
                let start = day.with_day(1)?;
                (start, start.checked_add_months(Months::new(1))?)
            }
            Granularity::Year => {
                let start = NaiveDate::from_ymd_opt(day.year(), 1, 1)?;
                (start, NaiveDate::from_ymd_opt(day.year().checked_add(1)?, 1, 1)?)
            }
        };
        DateInterval::new(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)).ok()
    }

    fn next_matching(
        &self,
        after: NaiveDateTime,
        pattern: &RecurrencePattern,
    ) -> Option<NaiveDateTime> {
        let time = pattern.time_of_day()?;
        let mut day = after.date();
        for _ in 0..=SEARCH_HORIZON_DAYS {
            let candidate = day.and_time(time);
            if candidate > after && pattern.matches_date(day) {
                return Some(candidate);
            }
            day = day.succ_opt()?;
        }
        None
    }

    fn add_months(&self, date: NaiveDateTime, delta: i32) -> Option<NaiveDateTime> {
        let months = Months::new(delta.unsigned_abs());
        if delta >= 0 {
            date.checked_add_months(months)
        } else {
            date.checked_sub_months(months)
        }
    }

    fn add_days(&self, date: NaiveDateTime, delta: i64) -> Option<NaiveDateTime> {
        let days = Days::new(delta.unsigned_abs());
        if delta >= 0 {
            date.checked_add_days(days)
        } else {
            date.checked_sub_days(days)
        }
    }

    fn component(&self, unit: Component, date: NaiveDateTime) -> i32 {
        match unit {
            Component::Year => date.year(),
            Component::Month => date.month() as i32,
            Component::Day => date.day() as i32,
            Component::Weekday => date.weekday().number_from_sunday() as i32,
            Component::Hour => date.hour() as i32,
            Component::Minute => date.minute() as i32,
            Component::Second => date.second() as i32,
        }
    }
}
