//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use almanac_calendar::GregorianCalendar;
use almanac_navigator::NavigatorConfig;

use crate::cli::ViewArgs;
use crate::config::{self, AlmanacConfig, CalendarToml, ViewToml};

/// Parses a weekday name (full or three-letter, any case).
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "sunday" | "sun" => Ok(Weekday::Sun),
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        other => bail!("unknown weekday: {other:?}"),
    }
}

/// Parses `YYYY-MM` into midnight of the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDateTime> {
    let Some((year, month)) = s.trim().split_once('-') else {
        bail!("month must be YYYY-MM, got {s:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
        bail!("month out of range: {s:?}");
    };
    Ok(date.and_time(NaiveTime::MIN))
}

/// Builds the calendar system from the TOML calendar section.
pub fn build_calendar(calendar: &CalendarToml) -> Result<GregorianCalendar> {
    Ok(GregorianCalendar::new(parse_weekday(&calendar.first_weekday)?))
}

/// Builds a [`NavigatorConfig`] from the TOML view section and validates it.
pub fn build_navigator_config(view: &ViewToml) -> Result<NavigatorConfig> {
    let mut cfg = NavigatorConfig::new()
        .with_show_header(view.show_header)
        .with_gesture_threshold(view.gesture_threshold);
    if let Some(ref month) = view.initial_month {
        cfg = cfg.with_initial_month(parse_month(month)?);
    }
    cfg.validate().context("invalid [view] configuration")?;
    Ok(cfg)
}

/// Loads the config file named by `args` and applies CLI overrides on top.
///
/// `month` replaces the configured initial month when given.
pub fn load_with_overrides(args: &ViewArgs, month: Option<&str>) -> Result<AlmanacConfig> {
    let mut cfg = config::load(args.config.as_deref())?;
    if let Some(ref first) = args.first_weekday {
        cfg.calendar.first_weekday = first.clone();
    }
    if args.no_header {
        cfg.view.show_header = false;
    }
    if let Some(month) = month {
        cfg.view.initial_month = Some(month.to_string());
    }
    Ok(cfg)
}
