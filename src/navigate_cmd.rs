//! Navigate command: replay button and gesture events against a month view.

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use almanac_calendar::CalendarSystem;
use almanac_grid::DayNumberRenderer;
use almanac_navigator::{
    CalendarNavigator, Clock, DragDelta, GestureOutcome, NavState, NavigatorError,
};

use crate::cli::NavigateArgs;
use crate::{convert, text};

/// One input event of a month view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Previous,
    Next,
    Today,
    /// Drag in progress, cumulative horizontal translation.
    DragMove(f64),
    /// Drag released at this horizontal translation.
    DragEnd(f64),
}

/// Parses a comma-separated event script such as `next,move:-60,drag:-150`.
pub fn parse_events(script: &str) -> Result<Vec<NavEvent>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_event)
        .collect()
}

fn parse_event(s: &str) -> Result<NavEvent> {
    let lower = s.to_lowercase();
    match lower.as_str() {
        "prev" | "previous" => return Ok(NavEvent::Previous),
        "next" => return Ok(NavEvent::Next),
        "today" => return Ok(NavEvent::Today),
        _ => {}
    }
    let Some((kind, dx)) = lower.split_once(':') else {
        bail!("unknown event: {s:?}");
    };
    let dx: f64 = dx
        .trim()
        .parse()
        .with_context(|| format!("invalid drag distance in {s:?}"))?;
    match kind.trim() {
        "move" => Ok(NavEvent::DragMove(dx)),
        "drag" => Ok(NavEvent::DragEnd(dx)),
        other => bail!("unknown event kind: {other:?}"),
    }
}

/// Applies one event to `state`.
///
/// A failed event leaves the displayed month unchanged.
pub fn apply<C, K>(
    navigator: &mut CalendarNavigator<C, K>,
    state: &mut NavState,
    event: NavEvent,
) -> Result<(), NavigatorError>
where
    C: CalendarSystem,
    K: Clock,
{
    match event {
        NavEvent::Previous => {
            navigator.previous(state)?;
        }
        NavEvent::Next => {
            navigator.next(state)?;
        }
        NavEvent::Today => {
            navigator.today(state);
        }
        NavEvent::DragMove(dx) => {
            navigator.on_drag_changed(state, DragDelta::horizontal(dx));
        }
        NavEvent::DragEnd(dx) => {
            if navigator.on_drag_ended(state, DragDelta::horizontal(dx))?
                == GestureOutcome::Cancelled
            {
                println!("drag of {dx} cancelled");
            }
        }
    }
    Ok(())
}

/// Replay the events and print every month change, then the final grid.
///
/// Failing events are reported and skipped.
pub fn run(args: NavigateArgs) -> Result<()> {
    let _cmd = info_span!("navigate").entered();

    let events = parse_events(&args.events)?;
    if events.is_empty() {
        bail!("no events given");
    }

    let cfg = convert::load_with_overrides(&args.view, args.month.as_deref())?;
    let calendar = convert::build_calendar(&cfg.calendar)?;
    let nav_cfg = convert::build_navigator_config(&cfg.view)?;
    let mut navigator = CalendarNavigator::new(calendar, nav_cfg)?
        .on_month_change(|month| println!("month changed: {}", month.format("%Y-%m")));

    let mut state = navigator.initial_state();
    info!(start = %state.month(), n_events = events.len(), "replaying events");

    let mut n_failed = 0usize;
    for (i, event) in events.into_iter().enumerate() {
        debug!(?event, "event");
        if let Err(e) = apply(&mut navigator, &mut state, event) {
            warn!(index = i, ?event, error = %e, "event failed");
            eprintln!("event {} ({event:?}) failed: {e}", i + 1);
            n_failed += 1;
        }
    }
    if n_failed > 0 {
        info!(n_failed, "replay finished with failed events");
    }

    println!();
    println!("{}", text::format_month(&navigator.render(&state, &DayNumberRenderer)));
    Ok(())
}
