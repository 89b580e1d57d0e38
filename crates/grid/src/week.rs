//! Grid cells and seven-day weeks.

use chrono::NaiveDateTime;

/// A single day cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDay {
    date: NaiveDateTime,
    in_month: bool,
}

impl GridDay {
    /// Creates a cell for `date`; `in_month` is `false` for filler days.
    pub fn new(date: NaiveDateTime, in_month: bool) -> Self {
        Self { date, in_month }
    }

    /// Returns the instant (midnight) of this day.
    pub fn date(self) -> NaiveDateTime {
        self.date
    }

    /// Returns `true` if the day belongs to the displayed month.
    pub fn is_in_month(self) -> bool {
        self.in_month
    }

    /// Returns `true` if the day belongs to an adjacent month and is only
    /// shown for grid alignment.
    pub fn is_filler(self) -> bool {
        !self.in_month
    }
}

/// Exactly seven days in weekday order, starting at the calendar's first
/// weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    days: [GridDay; 7],
}

impl Week {
    pub fn new(days: [GridDay; 7]) -> Self {
        Self { days }
    }

    /// Returns the first day of the week.
    pub fn start(&self) -> NaiveDateTime {
        self.days[0].date()
    }

    /// Returns the seven days.
    pub fn days(&self) -> &[GridDay; 7] {
        &self.days
    }

    /// Returns the days that belong to the displayed month.
    pub fn month_days(&self) -> impl Iterator<Item = GridDay> + '_ {
        self.days.iter().copied().filter(|d| d.is_in_month())
    }

    /// Returns the number of filler days in this week.
    pub fn filler_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_filler()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, in_month: bool) -> GridDay {
        let date = NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        GridDay::new(date, in_month)
    }

    #[test]
    fn filler_flags() {
        assert!(day(1, true).is_in_month());
        assert!(!day(1, true).is_filler());
        assert!(day(1, false).is_filler());
    }

    #[test]
    fn week_accessors() {
        let days = std::array::from_fn(|i| day(i as u32 + 1, i >= 2));
        let week = Week::new(days);
        assert_eq!(week.start(), day(1, false).date());
        assert_eq!(week.days().len(), 7);
        assert_eq!(week.filler_count(), 2);
        assert_eq!(week.month_days().count(), 5);
    }
}
