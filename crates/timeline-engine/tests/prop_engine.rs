//! Property-based tests for selection, overlap, and grouping using proptest.
//!
//! These verify invariants that must hold for *any* event collection, not
//! just the hand-picked examples in the unit suites.

use calgrid::grid::{format_date, week_dates};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use timeline_engine::conflict::{group_conflicts, overlap};
use timeline_engine::event::Event;
use timeline_engine::layout::vertical_extent;
use timeline_engine::select::{events_for_day, events_for_week};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..=2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid ymd"))
}

fn arb_instant() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..=23, 0u32..=59)
        .prop_map(|(date, h, min)| date.and_hms_opt(h, min, 0).expect("valid hms"))
}

/// The two stored shapes an event can arrive in.
#[derive(Debug, Clone)]
enum Shape {
    Timed { start: NaiveDateTime, minutes: i64 },
    Legacy { date: NaiveDate },
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (arb_instant(), 1i64..=480)
            .prop_map(|(start, minutes)| Shape::Timed { start, minutes }),
        arb_date().prop_map(|date| Shape::Legacy { date }),
    ]
}

/// Materialize shapes into events with unique ids.
fn build_events(shapes: Vec<Shape>) -> Vec<Event> {
    shapes
        .into_iter()
        .enumerate()
        .map(|(i, shape)| match shape {
            Shape::Timed { start, minutes } => Event::scheduled(
                format!("evt-{i}"),
                start,
                start + Duration::minutes(minutes),
            ),
            Shape::Legacy { date } => Event::dated(format!("evt-{i}"), format_date(date), None),
        })
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: overlap is symmetric for any pair of events
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_is_symmetric(shapes in proptest::collection::vec(arb_shape(), 2)) {
        let events = build_events(shapes);
        prop_assert_eq!(
            overlap(&events[0], &events[1]),
            overlap(&events[1], &events[0])
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: an event overlaps itself iff it has a positive-duration span
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn self_overlap_iff_positive_span(shape in arb_shape()) {
        let events = build_events(vec![shape.clone()]);
        let expected = matches!(shape, Shape::Timed { .. });
        prop_assert_eq!(overlap(&events[0], &events[0]), expected);
    }
}

// ---------------------------------------------------------------------------
// Property 3: legacy events never overlap anything
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn legacy_never_overlaps(date in arb_date(), shape in arb_shape()) {
        let legacy = Event::dated("legacy", format_date(date), None);
        let other = build_events(vec![shape]).remove(0);

        prop_assert!(!overlap(&legacy, &other));
        prop_assert!(!overlap(&other, &legacy));
    }
}

// ---------------------------------------------------------------------------
// Property 4: grouping is an exact partition of the input ids
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn grouping_partitions_the_input(
        shapes in proptest::collection::vec(arb_shape(), 0..40),
    ) {
        let events = build_events(shapes);
        let groups = group_conflicts(&events);

        let mut grouped_ids: Vec<String> = groups
            .iter()
            .flat_map(|g| g.events.iter().map(|e| e.id.clone()))
            .collect();
        grouped_ids.sort();

        let mut input_ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        input_ids.sort();

        prop_assert_eq!(grouped_ids, input_ids, "ids lost, duplicated, or invented");
        for group in &groups {
            prop_assert!(!group.is_empty(), "groups always contain their seed");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: every member of a group overlaps the group's seed
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn members_overlap_their_seed(
        shapes in proptest::collection::vec(arb_shape(), 0..40),
    ) {
        let events = build_events(shapes);

        for group in group_conflicts(&events) {
            let seed = &group.events[0];
            for member in &group.events[1..] {
                prop_assert!(
                    overlap(seed, member),
                    "{} was claimed without overlapping seed {}",
                    member.id,
                    seed.id
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: a timed event is always selected on its start day, sorted
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn timed_events_selected_on_their_start_day(
        shapes in proptest::collection::vec(arb_shape(), 1..30),
        pick in 0usize..30,
    ) {
        let events = build_events(shapes);
        let Some(event) = events.get(pick % events.len()) else {
            return Ok(());
        };
        let Some(start) = event.start_instant() else {
            return Ok(());
        };

        let selected = events_for_day(&events, start.date());
        prop_assert!(
            selected.iter().any(|e| e.id == event.id),
            "{} missing from its own day",
            event.id
        );

        // Sorted ascending among events that carry an instant.
        let instants: Vec<_> = selected.iter().filter_map(Event::start_instant).collect();
        for pair in instants.windows(2) {
            prop_assert!(pair[0] <= pair[1], "day result not sorted");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: day and week selection agree
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn day_selection_implies_week_selection(
        shapes in proptest::collection::vec(arb_shape(), 0..30),
        reference in arb_date(),
    ) {
        let events = build_events(shapes);
        let week = week_dates(reference);
        let weekly = events_for_week(&events, &week);

        for day in week {
            for event in events_for_day(&events, day) {
                prop_assert!(
                    weekly.iter().any(|e| e.id == event.id),
                    "{} selected for {} but missing from its week",
                    event.id,
                    day
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 8: extent floor and defaults
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn extent_floor_and_defaults(start in arb_instant(), minutes in 1i64..=2880) {
        let end = start + Duration::minutes(minutes);

        prop_assert!(vertical_extent(Some(start), Some(end)) >= 30);
        prop_assert_eq!(vertical_extent(Some(start), None), 60);
        prop_assert_eq!(vertical_extent(None, Some(end)), 60);
        prop_assert_eq!(vertical_extent(None, None), 60);
    }
}
