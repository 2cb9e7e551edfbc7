//! Day, week, and month boundary arithmetic on local calendar fields.
//!
//! Weeks are Monday-anchored (ISO): Sunday maps back six days. The canonical
//! string key for a calendar day is `YYYY-MM-DD`; membership predicates that
//! take a string fail closed on anything that does not parse.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{GridError, Result};

/// Cap on month-grid length: six full Monday-start weeks.
const MAX_MONTH_CELLS: usize = 42;

/// Format a date as the canonical `YYYY-MM-DD` key used wherever dates are
/// compared as strings.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical `YYYY-MM-DD` string back into a date.
///
/// Strict inverse of [`format_date`]. The instant form of the result is
/// [`day_start`].
///
/// # Errors
/// Returns `GridError::InvalidDate` if the string is not a real calendar
/// date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| GridError::InvalidDate(s.to_string()))
}

/// Local midnight of `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last instant of `date` at millisecond precision (`23:59:59.999`).
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    day_start(date) + Duration::milliseconds(86_399_999)
}

/// True when two instants fall on the same local calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// True when `date` is `today`. `today` is supplied by the caller.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// True when `date` falls in the given month of the given year.
/// `month` is 1-based (1 = January).
pub fn is_same_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

/// The Monday of the week containing `date`. Sunday maps back six days.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The seven consecutive dates of `date`'s week, Monday through Sunday.
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(reference);
    std::array::from_fn(|i| monday + Days::new(i as u64))
}

/// Dates of the complete Monday-start weeks covering a month: from the
/// Monday on or before the 1st through the Sunday on or after the last day.
///
/// The natural span is returned without padding, capped at 42 entries.
/// `month` is 1-based; values outside `1..=12` yield an empty grid.
pub fn month_calendar_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last = last_of_month(first);
    let grid_start = start_of_week(first);
    // Sunday on or after the last day of the month.
    let grid_end = last + Days::new(u64::from(6 - last.weekday().num_days_from_monday()));

    grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .take(MAX_MONTH_CELLS)
        .collect()
}

/// Last day of the month containing `date`.
fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_month {
        Some(d) => d - Days::new(1),
        None => date,
    }
}

/// Whether a canonical `YYYY-MM-DD` string falls in the week containing
/// `today`. Strings that do not parse are never members.
pub fn is_this_week(date_str: &str, today: NaiveDate) -> bool {
    let Ok(date) = parse_date(date_str) else {
        return false;
    };
    let week = week_dates(today);
    week[0] <= date && date <= week[6]
}

/// Whether a canonical `YYYY-MM-DD` string falls in the month containing
/// `today`. Strings that do not parse are never members.
pub fn is_this_month(date_str: &str, today: NaiveDate) -> bool {
    match parse_date(date_str) {
        Ok(date) => is_same_month(date, today.month(), today.year()),
        Err(_) => false,
    }
}
