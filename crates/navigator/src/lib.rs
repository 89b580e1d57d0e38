//! Month navigation for calendar views.
//!
//! This crate holds the state machine behind a month view: previous / next
//! buttons, jump-to-today, and horizontal swipes that page between months.
//! State lives in a caller-owned [`NavState`]; the [`CalendarNavigator`]
//! mutates it one event at a time and reports each committed transition to
//! a single month-changed subscriber.
//!
//! # Event flow
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ button/drag  │────▶│  navigator     │────▶│ subscriber(date) │
//!  │ event        │     │  (NavState)    │     │                  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//!                               │
//!                               ▼
//!                       ┌────────────────┐
//!                       │ MonthGrid →    │
//!                       │ RenderedMonth  │
//!                       └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use almanac_calendar::GregorianCalendar;
//! use almanac_navigator::{CalendarNavigator, NavigatorConfig};
//! use chrono::NaiveDate;
//!
//! let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut nav = CalendarNavigator::new(
//!     GregorianCalendar::default(),
//!     NavigatorConfig::new().with_initial_month(march),
//! )
//! .unwrap()
//! .on_month_change(move |month| sink.borrow_mut().push(month));
//!
//! let mut state = nav.initial_state();
//! nav.next(&mut state).unwrap();
//! assert_eq!(seen.borrow().len(), 1);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod navigator;
pub mod render;
pub mod state;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_GESTURE_THRESHOLD, NavigatorConfig};
pub use error::NavigatorError;
pub use navigator::{CalendarNavigator, GestureOutcome};
pub use render::RenderedMonth;
pub use state::{DragDelta, NavState};
pub use view::CalendarView;
