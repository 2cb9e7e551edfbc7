//! # calgrid
//!
//! Monday-anchored calendar grid arithmetic for day/week/month views.
//!
//! Everything here is a pure function of its arguments, operating on chrono's
//! naive (local wall-clock) types. Boundary math reads local calendar fields
//! directly and never round-trips through UTC, so a date near midnight stays
//! anchored to the user's intended day. "Today" is always an explicit
//! parameter; the crate never reads the ambient clock.
//!
//! ## Modules
//!
//! - [`grid`] — day/week/month boundaries, the month matrix, membership predicates
//! - [`labels`] — display text for dates, weekdays, and months
//! - [`error`] — error types

pub mod error;
pub mod grid;
pub mod labels;

pub use error::GridError;
pub use grid::{
    day_end, day_start, format_date, is_same_day, is_same_month, is_this_month, is_this_week,
    is_today, month_calendar_dates, parse_date, start_of_month, start_of_week, week_dates,
};
pub use labels::{
    long_date_label, month_name, relative_day_label, weekday_name, weekday_short_name,
};
