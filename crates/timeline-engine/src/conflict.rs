//! Temporal conflict detection and side-by-side display grouping.
//!
//! Grouping is seed-based: each unclaimed event opens a group, then one scan
//! of the remaining input claims every still-unclaimed event overlapping the
//! seed itself. The result is good enough for column layout but is not a
//! clique cover -- three partially overlapping events can split differently
//! depending on input order, and layout output depends on reproducing that
//! split exactly.

use std::collections::HashSet;

use crate::event::Event;

/// Events assigned to share horizontal space in a timeline render, seed
/// first, then discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub events: Vec<Event>,
}

impl ConflictGroup {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Whether two events overlap in time.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`; touching
/// endpoints are not overlaps. Events without a complete readable span --
/// legacy dated events in particular -- never overlap anything: with no end
/// boundary there is nothing to intersect.
pub fn overlap(a: &Event, b: &Event) -> bool {
    match (a.time_span(), b.time_span()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => {
            start_a < end_b && start_b < end_a
        }
        _ => false,
    }
}

/// Partition events into display groups by the seed-then-scan rule.
///
/// Events are walked in input order. Each not-yet-claimed event seeds a new
/// group; the scan then claims every remaining unclaimed event that overlaps
/// the *seed* (not the group's other members). Every id lands in exactly one
/// group, and group order follows the seeds' input order.
pub fn group_conflicts(events: &[Event]) -> Vec<ConflictGroup> {
    let mut claimed: HashSet<&str> = HashSet::with_capacity(events.len());
    let mut groups = Vec::new();

    for seed in events {
        if !claimed.insert(seed.id.as_str()) {
            continue;
        }
        let mut members = vec![seed.clone()];
        for candidate in events {
            if claimed.contains(candidate.id.as_str()) {
                continue;
            }
            if overlap(seed, candidate) {
                claimed.insert(candidate.id.as_str());
                members.push(candidate.clone());
            }
        }
        groups.push(ConflictGroup { events: members });
    }

    groups
}
