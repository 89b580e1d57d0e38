//! # almanac-calendar
//!
//! Calendar systems, half-open date intervals, recurrence patterns, and the
//! lazy date enumeration every grid is built from.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarSystem"] -->|".interval_of()"| B["DateInterval"]
//!     C["RecurrencePattern"] --> D["generate_dates()"]
//!     B --> D
//!     A -->|".next_matching()"| D
//!     D --> E["DateSequence (lazy)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{
//!     CalendarSystem, GregorianCalendar, Granularity, RecurrencePattern, generate_dates,
//! };
//!
//! let cal = GregorianCalendar::new(chrono::Weekday::Sun);
//! let month = cal.interval_of(Granularity::Month, some_date)?;
//!
//! // Week starts overlapping the month
//! let weeks: Vec<_> =
//!     generate_dates(&cal, month, RecurrencePattern::week_start(cal.first_weekday())).collect();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `system` | The `CalendarSystem` capability and component extraction |
//! | `gregorian` | Proleptic Gregorian implementation on `chrono` |
//! | `interval` | Half-open intervals and granularities |
//! | `pattern` | Recurrence patterns |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod error;
mod gregorian;
mod interval;
mod pattern;
mod sequence;
mod system;

pub use error::CalendarError;
pub use gregorian::GregorianCalendar;
pub use interval::{DateInterval, Granularity};
pub use pattern::RecurrencePattern;
pub use sequence::{DateSequence, generate_dates};
pub use system::{CalendarSystem, Component};
