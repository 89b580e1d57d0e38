//! Plain-text layout of rendered months.

use almanac_navigator::RenderedMonth;

const COLUMN: usize = 3;

/// Lays out a month as fixed-width text: optional title, weekday labels,
/// then one line per week. Hidden filler cells keep their column but print
/// blank.
pub fn format_month(month: &RenderedMonth<String>) -> String {
    let mut lines = Vec::with_capacity(month.weeks().len() + 2);
    if let Some(title) = month.title() {
        lines.push(title.to_string());
    }
    lines.push(row(month.weekday_labels().iter().copied()));
    for week in month.weeks() {
        lines.push(row(week.iter().map(|cell| {
            if cell.is_hidden() {
                ""
            } else {
                cell.content().as_str()
            }
        })));
    }
    if month.is_empty() {
        lines.push("(no days)".to_string());
    }
    lines.join("\n")
}

fn row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(|c| format!("{c:>COLUMN$}"))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::GregorianCalendar;
    use almanac_grid::DayNumberRenderer;
    use almanac_navigator::{CalendarNavigator, NavState, NavigatorConfig};
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn march_2024() {
        let nav = CalendarNavigator::new(
            GregorianCalendar::new(Weekday::Sun),
            NavigatorConfig::new(),
        )
        .unwrap();
        let march = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let text = format_month(&nav.render(&NavState::new(march), &DayNumberRenderer));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "2024/3");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "                      1   2");
        assert_eq!(lines[7], " 31");
    }

    #[test]
    fn empty_month() {
        let month = RenderedMonth::<String>::new(
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            None,
            almanac_grid::weekday_labels(Weekday::Mon),
            Vec::new(),
        );
        let text = format_month(&month);
        assert_eq!(text, "Mon Tue Wed Thu Fri Sat Sun\n(no days)");
    }
}
