//! Date sequence generation inside an interval.

use std::iter::FusedIterator;

use chrono::NaiveDateTime;
use tracing::trace;

use crate::interval::DateInterval;
use crate::pattern::RecurrencePattern;
use crate::system::CalendarSystem;

/// Enumerates the dates of `interval` that match `pattern`.
///
/// The first element is always `interval.start()`, whether or not it
/// matches. After that every matching instant strictly after the start is
/// produced in increasing order, stopping before the first one that is
/// `>= interval.end()`.
///
/// The returned sequence is lazy and holds no state besides its inputs, so
/// calling this twice with the same arguments yields the same dates.
///
/// # Example
///
/// ```
/// use almanac_calendar::{
///     CalendarSystem, GregorianCalendar, Granularity, RecurrencePattern, generate_dates,
/// };
/// use chrono::NaiveDate;
///
/// let cal = GregorianCalendar::default();
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let week = cal.interval_of(Granularity::Week, day).unwrap();
/// let days: Vec<_> = generate_dates(&cal, week, RecurrencePattern::midnight()).collect();
/// assert_eq!(days.len(), 7);
/// ```
pub fn generate_dates<C>(
    calendar: &C,
    interval: DateInterval,
    pattern: RecurrencePattern,
) -> DateSequence<'_, C>
where
    C: CalendarSystem + ?Sized,
{
    DateSequence {
        calendar,
        interval,
        pattern,
        last: None,
        done: false,
    }
}

/// Lazy iterator returned by [`generate_dates`].
#[derive(Debug)]
pub struct DateSequence<'c, C: ?Sized> {
    calendar: &'c C,
    interval: DateInterval,
    pattern: RecurrencePattern,
    last: Option<NaiveDateTime>,
    done: bool,
}

impl<C: ?Sized> Clone for DateSequence<'_, C> {
    fn clone(&self) -> Self {
        Self {
            calendar: self.calendar,
            interval: self.interval,
            pattern: self.pattern,
            last: self.last,
            done: self.done,
        }
    }
}

impl<C: CalendarSystem + ?Sized> Iterator for DateSequence<'_, C> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(last) = self.last else {
            let start = self.interval.start();
            self.last = Some(start);
            return Some(start);
        };
        match self.calendar.next_matching(last, &self.pattern) {
            Some(candidate) if candidate > last && candidate < self.interval.end() => {
                self.last = Some(candidate);
                Some(candidate)
            }
            other => {
                trace!(
                    start = %self.interval.start(),
                    end = %self.interval.end(),
                    stopped_at = ?other,
                    "date sequence exhausted"
                );
                self.done = true;
                None
            }
        }
    }
}

impl<C: CalendarSystem + ?Sized> FusedIterator for DateSequence<'_, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::GregorianCalendar;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn interval(start: NaiveDateTime, end: NaiveDateTime) -> DateInterval {
        DateInterval::new(start, end).unwrap()
    }

    #[test]
    fn empty_interval_yields_start() {
        let cal = GregorianCalendar::default();
        let dates: Vec<_> = generate_dates(
            &cal,
            interval(at(2024, 3, 1), at(2024, 3, 1)),
            RecurrencePattern::midnight(),
        )
        .collect();
        assert_eq!(dates, vec![at(2024, 3, 1)]);
    }

    #[test]
    fn start_included_even_if_unmatched() {
        let cal = GregorianCalendar::default();
        let start = at(2024, 3, 15) + chrono::TimeDelta::hours(7);
        let dates: Vec<_> = generate_dates(
            &cal,
            interval(start, at(2024, 6, 1)),
            RecurrencePattern::first_of_month(),
        )
        .collect();
        assert_eq!(dates, vec![start, at(2024, 4, 1), at(2024, 5, 1)]);
    }

    #[test]
    fn end_is_excluded() {
        let cal = GregorianCalendar::default();
        let dates: Vec<_> = generate_dates(
            &cal,
            interval(at(2024, 3, 1), at(2024, 3, 4)),
            RecurrencePattern::midnight(),
        )
        .collect();
        assert_eq!(dates, vec![at(2024, 3, 1), at(2024, 3, 2), at(2024, 3, 3)]);
    }

    #[test]
    fn months_of_a_year() {
        let cal = GregorianCalendar::default();
        let year = interval(at(2024, 1, 1), at(2025, 1, 1));
        let months: Vec<_> =
            generate_dates(&cal, year, RecurrencePattern::first_of_month()).collect();
        assert_eq!(months.len(), 12);
        for (i, m) in months.iter().enumerate() {
            assert_eq!(*m, at(2024, i as u32 + 1, 1));
        }
    }

    #[test]
    fn unmatched_pattern_yields_only_start() {
        let cal = GregorianCalendar::default();
        let pattern = RecurrencePattern::midnight().with_month(2).with_day(30);
        let dates: Vec<_> =
            generate_dates(&cal, interval(at(2024, 1, 1), at(2030, 1, 1)), pattern).collect();
        assert_eq!(dates, vec![at(2024, 1, 1)]);
    }

    #[test]
    fn fused_after_exhaustion() {
        let cal = GregorianCalendar::default();
        let mut seq = generate_dates(
            &cal,
            interval(at(2024, 3, 1), at(2024, 3, 2)),
            RecurrencePattern::midnight(),
        );
        assert_eq!(seq.next(), Some(at(2024, 3, 1)));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn clone_restarts_from_same_point() {
        let cal = GregorianCalendar::default();
        let seq = generate_dates(
            &cal,
            interval(at(2024, 3, 1), at(2024, 3, 8)),
            RecurrencePattern::midnight(),
        );
        let a: Vec<_> = seq.clone().collect();
        let b: Vec<_> = seq.collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }
}
