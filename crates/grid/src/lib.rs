//! Month grids for calendar views.
//!
//! A [`MonthGrid`] is the set of whole weeks overlapping one month. Days from
//! the neighbouring months that pad the first and last week stay in the grid
//! as filler so every row keeps seven columns.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ month        │────▶│ week starts    │────▶│ 7 days per week  │
//!  │ interval     │     │ (first weekday)│     │ (+ filler flags) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use almanac_calendar::GregorianCalendar;
//! use almanac_grid::{DayNumberRenderer, MonthGrid};
//! use chrono::{NaiveDate, Weekday};
//!
//! let cal = GregorianCalendar::new(Weekday::Sun);
//! let month = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let grid = MonthGrid::new(month, &cal).unwrap();
//!
//! let rows = grid.render(&DayNumberRenderer);
//! assert_eq!(rows[0][6].content(), " 2");
//! assert!(rows[0][0].is_hidden());
//! ```

pub mod labels;
pub mod month;
pub mod render;
pub mod week;

pub use almanac_calendar::CalendarError;
pub use labels::{month_title, weekday_labels};
pub use month::{MonthGrid, weeks_for};
pub use render::{Cell, CellRenderer, DayNumberRenderer};
pub use week::{GridDay, Week};
