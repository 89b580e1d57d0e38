//! Month command: print the grid of a single month.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_grid::DayNumberRenderer;
use almanac_navigator::CalendarNavigator;

use crate::cli::MonthArgs;
use crate::{convert, text};

/// Print one month.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let cfg = convert::load_with_overrides(&args.view, args.month.as_deref())?;
    let calendar = convert::build_calendar(&cfg.calendar)?;
    let nav_cfg = convert::build_navigator_config(&cfg.view)?;
    let navigator = CalendarNavigator::new(calendar, nav_cfg)?;

    let state = navigator.initial_state();
    let rendered = navigator.render(&state, &DayNumberRenderer);
    if rendered.is_empty() {
        // render only logs resolution failures; rebuild the grid for the cause
        navigator
            .grid(&state)
            .with_context(|| format!("failed to resolve month containing {}", state.month()))?;
    }
    info!(
        month = %state.month().format("%Y-%m"),
        n_weeks = rendered.weeks().len(),
        "month rendered"
    );

    println!("{}", text::format_month(&rendered));
    Ok(())
}
