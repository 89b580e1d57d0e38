//! Recurrence patterns: partial date-component matches.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// A set of optional date components that an instant must match.
///
/// Date fields left unset match any value. Time fields left unset resolve to
/// zero, so a pattern denotes at most one instant per calendar day.
///
/// # Example
///
/// ```
/// use almanac_calendar::RecurrencePattern;
/// use chrono::Weekday;
///
/// let pattern = RecurrencePattern::midnight().with_weekday(Weekday::Sun);
/// assert_eq!(pattern.weekday(), Some(Weekday::Sun));
/// assert_eq!(pattern, RecurrencePattern::week_start(Weekday::Sun));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecurrencePattern {
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<Weekday>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
}

impl RecurrencePattern {
    /// Creates a pattern with no components set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches every day at `00:00:00`.
    pub fn midnight() -> Self {
        Self::new().with_hour(0).with_minute(0).with_second(0)
    }

    /// Matches the first day of every month at midnight.
    pub fn first_of_month() -> Self {
        Self::midnight().with_day(1)
    }

    /// Matches every `weekday` at midnight.
    pub fn week_start(weekday: Weekday) -> Self {
        Self::midnight().with_weekday(weekday)
    }

    /// Sets the month (1..=12) to match.
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the day of month (1..=31) to match.
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the weekday to match.
    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Sets the hour (0..=23).
    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Sets the minute (0..=59).
    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Sets the second (0..=59).
    pub fn with_second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    // --- Accessors ---

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    pub fn second(&self) -> Option<u32> {
        self.second
    }

    /// Returns the time of day this pattern resolves to, or `None` if the
    /// time fields are out of range and the pattern can never match.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
        )
    }

    /// Returns `true` if every date field that is set agrees with `date`.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        self.month.is_none_or(|m| date.month() == m)
            && self.day.is_none_or(|d| date.day() == d)
            && self.weekday.is_none_or(|w| date.weekday() == w)
    }

    /// Returns `true` if `instant` matches both the date and time fields.
    pub fn matches(&self, instant: NaiveDateTime) -> bool {
        self.matches_date(instant.date()) && self.time_of_day() == Some(instant.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn defaults_are_unset() {
        let p = RecurrencePattern::new();
        assert_eq!(p.month(), None);
        assert_eq!(p.day(), None);
        assert_eq!(p.weekday(), None);
        assert_eq!(p.hour(), None);
        assert_eq!(p.time_of_day(), NaiveTime::from_hms_opt(0, 0, 0));
    }

    #[test]
    fn builder_chaining() {
        let p = RecurrencePattern::new()
            .with_month(2)
            .with_day(29)
            .with_hour(12)
            .with_minute(30)
            .with_second(15);
        assert_eq!(p.month(), Some(2));
        assert_eq!(p.day(), Some(29));
        assert_eq!(p.time_of_day(), NaiveTime::from_hms_opt(12, 30, 15));
    }

    #[test]
    fn first_of_month_matches() {
        let p = RecurrencePattern::first_of_month();
        assert!(p.matches(at(2024, 3, 1, 0)));
        assert!(!p.matches(at(2024, 3, 1, 1)));
        assert!(!p.matches(at(2024, 3, 2, 0)));
    }

    #[test]
    fn week_start_matches_weekday() {
        let p = RecurrencePattern::week_start(Weekday::Sun);
        // 2024-03-03 is a Sunday
        assert!(p.matches(at(2024, 3, 3, 0)));
        assert!(!p.matches(at(2024, 3, 4, 0)));
    }

    #[test]
    fn out_of_range_time_never_matches() {
        let p = RecurrencePattern::new().with_hour(24);
        assert_eq!(p.time_of_day(), None);
        assert!(!p.matches(at(2024, 3, 3, 0)));
    }
}
