//! Block metrics for the 24-hour timeline.
//!
//! The vertical axis is minutes since local midnight: 1440 units per day,
//! which a renderer scales to pixels (1 unit = 1px at 60px per hour).
//! Horizontal placement comes from conflict groups: members of a group split
//! the column evenly.

use chrono::{NaiveDateTime, Timelike};

use crate::conflict::{group_conflicts, ConflictGroup};
use crate::event::Event;

/// Minimum legible block height, in axis units.
const MIN_EXTENT: i64 = 30;

/// Block height used when a span cannot be computed.
const DEFAULT_EXTENT: i64 = 60;

/// Minutes since local midnight of `start`.
pub fn vertical_offset(start: NaiveDateTime) -> i64 {
    i64::from(start.time().hour()) * 60 + i64::from(start.time().minute())
}

/// Block height for a span, in axis units.
///
/// `max(30, end - start)` in whole minutes when both instants are readable;
/// a missing side falls back to 60. A span crossing midnight simply runs
/// past the bottom of the day axis.
pub fn vertical_extent(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_minutes().max(MIN_EXTENT),
        _ => DEFAULT_EXTENT,
    }
}

/// Horizontal placement of one event inside its conflict group, as fractions
/// of the column width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub left: f64,
    pub width: f64,
}

/// Split the column evenly among the group's members, in group order (seed
/// first, then discovery order).
pub fn horizontal_slot(group: &ConflictGroup, index: usize) -> Slot {
    if group.is_empty() {
        return Slot {
            left: 0.0,
            width: 1.0,
        };
    }
    let width = 1.0 / group.len() as f64;
    Slot {
        left: index as f64 * width,
        width,
    }
}

/// Full geometry for one event block in a day column.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event: Event,
    /// Axis units from the top of the day column.
    pub top: i64,
    /// Block height in axis units.
    pub height: i64,
    /// Left edge as a fraction of the column width.
    pub left: f64,
    /// Width as a fraction of the column width.
    pub width: f64,
}

/// Lay out one day column: group conflicting events and give each a block.
///
/// Events without a start instant have no vertical position and are skipped
/// entirely, even when they were selected for the day through the legacy
/// date path.
pub fn lay_out_day(events: &[Event]) -> Vec<EventBlock> {
    let positioned: Vec<Event> = events
        .iter()
        .filter(|event| event.start_instant().is_some())
        .cloned()
        .collect();

    let mut blocks = Vec::with_capacity(positioned.len());
    for group in group_conflicts(&positioned) {
        for (index, event) in group.events.iter().enumerate() {
            let Some(start) = event.start_instant() else {
                continue;
            };
            let end = event.time_span().map(|(_, end)| end);
            let slot = horizontal_slot(&group, index);
            blocks.push(EventBlock {
                event: event.clone(),
                top: vertical_offset(start),
                height: vertical_extent(Some(start), end),
                left: slot.left,
                width: slot.width,
            });
        }
    }
    blocks
}
