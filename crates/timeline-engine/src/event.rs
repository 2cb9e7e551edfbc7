//! Event model and normalization of raw stored records.
//!
//! Stored data contains two historical shapes side by side: the canonical
//! pair of start/end instants, and an older form carrying only a calendar
//! date string plus an optional `HH:MM` time. Both are resolved into the
//! tagged [`Schedule`] variant exactly once, here at the boundary, so the
//! selection and layout code matches on the variant instead of re-checking
//! field presence at every use site.

use calgrid::grid::day_start;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::Result;

/// Accepted wall-clock datetime layouts, most specific first. `%.f` also
/// matches the no-fraction case.
const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A stored instant value: either an already-parsed datetime or whatever
/// loose string the record carried.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    Instant(NaiveDateTime),
    Text(String),
}

impl RawInstant {
    /// Resolve to a wall-clock instant, if the stored value is readable.
    fn resolve(&self) -> Option<NaiveDateTime> {
        match self {
            RawInstant::Instant(dt) => Some(*dt),
            RawInstant::Text(s) => parse_instant(s),
        }
    }
}

/// Parse a stored datetime string as local wall-clock time.
///
/// Accepts `T` or space separators with optional seconds and fractional
/// seconds. A trailing `Z` is tolerated but never converted -- stored times
/// are already local. A bare `YYYY-MM-DD` resolves to local midnight.
fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);
    for fmt in INSTANT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(day_start)
}

/// An event record as it sits in storage, before normalization. Every field
/// beyond the id is optional; which ones are present decides the shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEvent {
    pub id: Option<String>,
    pub start_time: Option<RawInstant>,
    pub end_time: Option<RawInstant>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub routine_id: Option<String>,
    pub color: Option<String>,
}

/// How an event anchors itself in time, resolved once at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Canonical shape: the record carried both instant fields. A `None`
    /// side means that stored value was unreadable; selection and layout
    /// degrade per field instead of dropping the whole record.
    Scheduled {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
    /// Older shape: a calendar date string plus an optional `HH:MM` time.
    /// With no end boundary these can never conflict with anything.
    LegacyDated {
        date: String,
        time_of_day: Option<String>,
    },
    /// Nothing usable to place the event by.
    Unplaced,
}

/// A calendar event as the engine sees it: an id, a resolved [`Schedule`],
/// and display-only fields carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Unique, stable identifier; the key for claimed-id tracking during
    /// conflict grouping.
    pub id: String,
    pub schedule: Schedule,
    /// Non-empty when this instance was materialized from a recurring
    /// template. Display-only; scheduling ignores it.
    pub routine_id: Option<String>,
    /// Display color, if the user picked one. Defaults are the renderer's.
    pub color: Option<String>,
}

impl Event {
    /// Event with a full start/end span.
    pub fn scheduled(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            schedule: Schedule::Scheduled {
                start: Some(start),
                end: Some(end),
            },
            routine_id: None,
            color: None,
        }
    }

    /// Legacy event carrying only a calendar date string and an optional
    /// time of day.
    pub fn dated(
        id: impl Into<String>,
        date: impl Into<String>,
        time_of_day: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            schedule: Schedule::LegacyDated {
                date: date.into(),
                time_of_day,
            },
            routine_id: None,
            color: None,
        }
    }

    /// Normalize a raw stored record.
    ///
    /// A record is treated as canonically timed iff *both* instant fields
    /// were present, readable or not; otherwise only its date string can
    /// place it. Returns `None` when the record has no non-empty id --
    /// without one it cannot participate in grouping.
    pub fn from_raw(raw: RawEvent) -> Option<Self> {
        let id = raw.id.filter(|id| !id.is_empty())?;
        let schedule = match (raw.start_time, raw.end_time, raw.date) {
            (Some(start), Some(end), _) => Schedule::Scheduled {
                start: start.resolve(),
                end: end.resolve(),
            },
            (_, _, Some(date)) => Schedule::LegacyDated {
                date,
                time_of_day: raw.time,
            },
            _ => Schedule::Unplaced,
        };
        Some(Self {
            id,
            schedule,
            routine_id: raw.routine_id,
            color: raw.color,
        })
    }

    /// The instant that positions this event on a timeline, if it has one.
    /// Legacy events have none, whatever their date says.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        match &self.schedule {
            Schedule::Scheduled { start, .. } => *start,
            _ => None,
        }
    }

    /// Both instants, when the event has a complete readable span. Only
    /// events with a full span can conflict.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self.schedule {
            Schedule::Scheduled {
                start: Some(start),
                end: Some(end),
            } => Some((start, end)),
            _ => None,
        }
    }

    /// True when this instance came from a recurring template.
    pub fn is_routine(&self) -> bool {
        self.routine_id.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// Parse a JSON array of stored event records into normalized events.
///
/// Records without an id are dropped; everything else is carried through
/// [`Event::from_raw`], however malformed its time fields are.
///
/// # Errors
/// Returns `EngineError::Json` when the document itself is not a JSON array
/// of event objects.
pub fn events_from_json(json: &str) -> Result<Vec<Event>> {
    let raw: Vec<RawEvent> = serde_json::from_str(json)?;
    Ok(raw.into_iter().filter_map(Event::from_raw).collect())
}
