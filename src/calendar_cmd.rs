//! Calendar command: print every month of an interval.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use almanac_calendar::{CalendarSystem, DateInterval, Granularity};
use almanac_grid::DayNumberRenderer;
use almanac_navigator::{CalendarNavigator, CalendarView, Clock, SystemClock};

use crate::cli::CalendarArgs;
use crate::{convert, text};

/// Print `months` consecutive months starting at the configured month.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();

    let cfg = convert::load_with_overrides(&args.view, args.from.as_deref())?;
    let n_months = args.months.unwrap_or(cfg.view.months);
    if n_months == 0 {
        bail!("nothing to show: months must be at least 1");
    }
    let n_months = i32::try_from(n_months).context("months is too large")?;

    let calendar = convert::build_calendar(&cfg.calendar)?;
    let nav_cfg = convert::build_navigator_config(&cfg.view)?;

    // Start on the first instant of the month so every view is a whole month.
    let anchor = nav_cfg.initial_month().unwrap_or_else(|| SystemClock.now());
    let start = calendar
        .interval_of(Granularity::Month, anchor)
        .context("failed to resolve the first month")?
        .start();
    let end = calendar
        .checked_add_months(start, n_months)
        .context("calendar interval leaves the representable range")?;
    let interval = DateInterval::new(start, end)?;

    let navigator = CalendarNavigator::new(calendar, nav_cfg)?;
    let view = CalendarView::new(navigator, interval);
    info!(n_months = view.len(), "rendering calendar");

    let pages: Vec<String> = view
        .render_all(&DayNumberRenderer)
        .iter()
        .map(text::format_month)
        .collect();
    println!("{}", pages.join("\n\n"));
    Ok(())
}
