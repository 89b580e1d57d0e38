use std::cell::{Cell, RefCell};
use std::rc::Rc;

use almanac_calendar::{CalendarError, GregorianCalendar};
use almanac_navigator::{
    CalendarNavigator, DragDelta, FixedClock, GestureOutcome, NavState, NavigatorConfig,
    NavigatorError,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn year_month(date: NaiveDateTime) -> (i32, u32) {
    (date.year(), date.month())
}

/// Navigator with a frozen clock and a subscriber that records every
/// notification.
fn recording_navigator(
    now: NaiveDateTime,
) -> (
    CalendarNavigator<GregorianCalendar, FixedClock>,
    Rc<RefCell<Vec<NaiveDateTime>>>,
) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let nav = CalendarNavigator::new(GregorianCalendar::default(), NavigatorConfig::new())
        .unwrap()
        .with_clock(FixedClock(now))
        .on_month_change(move |m| sink.borrow_mut().push(m));
    (nav, seen)
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------
#[test]
fn next_then_previous_round_trips() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    for start in [at(2024, 1, 31), at(2024, 3, 15), at(2023, 12, 1), at(2024, 12, 31)] {
        let mut state = NavState::new(start);
        nav.next(&mut state).unwrap();
        nav.previous(&mut state).unwrap();
        assert_eq!(year_month(state.month()), year_month(start));
    }
    assert_eq!(seen.borrow().len(), 8);
}

#[test]
fn next_and_previous_notify_new_month() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(at(2024, 3, 1));
    assert_eq!(nav.next(&mut state).unwrap(), at(2024, 4, 1));
    assert_eq!(nav.previous(&mut state).unwrap(), at(2024, 3, 1));
    assert_eq!(nav.previous(&mut state).unwrap(), at(2024, 2, 1));
    assert_eq!(*seen.borrow(), vec![at(2024, 4, 1), at(2024, 3, 1), at(2024, 2, 1)]);
    assert_eq!(state.month(), at(2024, 2, 1));
}

#[test]
fn year_boundaries() {
    let (mut nav, _) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(at(2024, 12, 1));
    nav.next(&mut state).unwrap();
    assert_eq!(year_month(state.month()), (2025, 1));
    nav.previous(&mut state).unwrap();
    nav.previous(&mut state).unwrap();
    assert_eq!(year_month(state.month()), (2024, 11));
}

#[test]
fn overflow_leaves_state_and_subscriber_untouched() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(NaiveDateTime::MAX);
    let err = nav.next(&mut state).unwrap_err();
    assert_eq!(
        err,
        NavigatorError::Calendar(CalendarError::DateOverflow {
            date: NaiveDateTime::MAX,
            months: 1,
        })
    );
    assert_eq!(state.month(), NaiveDateTime::MAX);
    assert!(seen.borrow().is_empty());

    let mut state = NavState::new(NaiveDateTime::MIN);
    assert!(nav.previous(&mut state).is_err());
    assert_eq!(state.month(), NaiveDateTime::MIN);
    assert!(seen.borrow().is_empty());
}

// ---------------------------------------------------------------------------
// Today
// ---------------------------------------------------------------------------
#[test]
fn today_always_notifies() {
    let now = at(2026, 10, 16);
    let (mut nav, seen) = recording_navigator(now);

    let mut state = NavState::new(at(1999, 1, 1));
    assert_eq!(nav.today(&mut state), now);
    assert_eq!(state.month(), now);

    // Already on the current month: still notifies.
    assert_eq!(nav.today(&mut state), now);
    assert_eq!(*seen.borrow(), vec![now, now]);
}

#[test]
fn today_reads_clock_at_call_time() {
    let now = Rc::new(Cell::new(at(2026, 10, 16)));
    let clock_now = Rc::clone(&now);
    let mut nav = CalendarNavigator::new(GregorianCalendar::default(), NavigatorConfig::new())
        .unwrap()
        .with_clock(move || clock_now.get());

    let mut state = nav.initial_state();
    assert_eq!(year_month(state.month()), (2026, 10));

    now.set(at(2027, 2, 3));
    nav.today(&mut state);
    assert_eq!(year_month(state.month()), (2027, 2));
}

// ---------------------------------------------------------------------------
// Gestures
// ---------------------------------------------------------------------------
#[test]
fn drag_right_pages_back_once() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(at(2024, 3, 1));
    nav.on_drag_changed(&mut state, DragDelta::horizontal(60.0));
    nav.on_drag_changed(&mut state, DragDelta::horizontal(150.0));
    let outcome = nav.on_drag_ended(&mut state, DragDelta::horizontal(150.0)).unwrap();
    assert_eq!(outcome, GestureOutcome::Previous(at(2024, 2, 1)));
    assert_eq!(*seen.borrow(), vec![at(2024, 2, 1)]);
    assert_eq!(state.drag_offset(), DragDelta::ZERO);
}

#[test]
fn drag_left_pages_forward_once() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(at(2024, 3, 1));
    let outcome = nav.on_drag_ended(&mut state, DragDelta::horizontal(-150.0)).unwrap();
    assert_eq!(outcome, GestureOutcome::Next(at(2024, 4, 1)));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn short_drag_is_discarded() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(at(2024, 3, 1));
    nav.on_drag_changed(&mut state, DragDelta::new(50.0, 300.0));
    let outcome = nav.on_drag_ended(&mut state, DragDelta::new(50.0, 300.0)).unwrap();
    assert_eq!(outcome, GestureOutcome::Cancelled);
    assert_eq!(state.month(), at(2024, 3, 1));
    assert_eq!(state.drag_offset(), DragDelta::ZERO);
    assert!(seen.borrow().is_empty());
}

#[test]
fn custom_threshold() {
    let mut nav = CalendarNavigator::new(
        GregorianCalendar::default(),
        NavigatorConfig::new().with_gesture_threshold(40.0),
    )
    .unwrap();
    let mut state = NavState::new(at(2024, 3, 1));
    let outcome = nav.on_drag_ended(&mut state, DragDelta::horizontal(-50.0)).unwrap();
    assert_eq!(outcome, GestureOutcome::Next(at(2024, 4, 1)));
}

#[test]
fn overflowing_swipe_resets_offset_but_keeps_month() {
    let (mut nav, seen) = recording_navigator(at(2026, 10, 16));
    let mut state = NavState::new(NaiveDateTime::MAX);
    nav.on_drag_changed(&mut state, DragDelta::horizontal(-300.0));
    assert!(nav.on_drag_ended(&mut state, DragDelta::horizontal(-300.0)).is_err());
    assert_eq!(state.month(), NaiveDateTime::MAX);
    assert_eq!(state.drag_offset(), DragDelta::ZERO);
    assert!(seen.borrow().is_empty());
}
