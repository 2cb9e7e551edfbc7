//! Day and week selection over an event collection.
//!
//! Selection is fail-soft: an event whose time fields cannot be read is
//! excluded from any day or week it cannot be confidently placed in, and a
//! single corrupt record never affects the rest of the collection.

use calgrid::grid::{day_end, day_start, format_date, parse_date};
use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, Schedule};

/// A closed wall-clock interval covering whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// `[00:00:00.000, 23:59:59.999]` of a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self::span(date, date)
    }

    /// `[local midnight of first, 23:59:59.999 of last]`.
    pub fn span(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: day_start(first),
            end: day_end(last),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Events belonging to `day`, sorted ascending by start instant.
///
/// Scheduled events match when their start instant falls on `day`; legacy
/// events match when their stored date equals the canonical key of `day`.
/// The sort is stable: events without an instant share one sort key ahead of
/// all timed events and keep their relative input order.
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    let key = format_date(day);
    let mut selected: Vec<Event> = events
        .iter()
        .filter(|event| matches_day(event, day, &key))
        .cloned()
        .collect();
    selected.sort_by_key(|event| event.start_instant());
    selected
}

fn matches_day(event: &Event, day: NaiveDate, key: &str) -> bool {
    match &event.schedule {
        Schedule::Scheduled { start, .. } => start.is_some_and(|s| s.date() == day),
        Schedule::LegacyDated { date, .. } => date == key,
        Schedule::Unplaced => false,
    }
}

/// Events belonging to a week, filtered but in input order.
///
/// The range is built from the first and last entries of `week_dates`
/// (assumed already Monday..Sunday). Scheduled events match when their start
/// instant lies in the closed range; legacy events match when their stored
/// date parses to a day within it. Unreadable dates never match.
pub fn events_for_week(events: &[Event], week_dates: &[NaiveDate]) -> Vec<Event> {
    let (Some(&first), Some(&last)) = (week_dates.first(), week_dates.last()) else {
        return Vec::new();
    };
    let range = DateRange::span(first, last);

    events
        .iter()
        .filter(|event| matches_range(event, &range, first, last))
        .cloned()
        .collect()
}

fn matches_range(event: &Event, range: &DateRange, first: NaiveDate, last: NaiveDate) -> bool {
    match &event.schedule {
        Schedule::Scheduled { start, .. } => start.is_some_and(|s| range.contains(s)),
        Schedule::LegacyDated { date, .. } => {
            parse_date(date).is_ok_and(|d| first <= d && d <= last)
        }
        Schedule::Unplaced => false,
    }
}
