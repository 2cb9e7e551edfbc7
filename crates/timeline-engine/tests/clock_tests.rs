//! Tests for clock-face formatting and the current-time indicator.

use chrono::{NaiveDate, NaiveDateTime};
use timeline_engine::clock::{format_clock, is_now_visible, now_offset};

fn instant(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn clock_faces_are_zero_padded() {
    assert_eq!(format_clock(Some(instant(2024, 3, 4, 9, 5))), "09:05");
    assert_eq!(format_clock(Some(instant(2024, 3, 4, 23, 59))), "23:59");
    assert_eq!(format_clock(Some(instant(2024, 3, 4, 0, 0))), "00:00");
}

#[test]
fn missing_instants_format_as_midnight() {
    assert_eq!(format_clock(None), "00:00");
}

#[test]
fn now_offset_matches_the_day_axis() {
    assert_eq!(now_offset(instant(2024, 3, 4, 0, 0)), 0);
    assert_eq!(now_offset(instant(2024, 3, 4, 9, 30)), 570);
    assert_eq!(now_offset(instant(2024, 3, 4, 23, 59)), 1439);
}

#[test]
fn indicator_shows_only_on_the_current_day() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    assert!(is_now_visible(day, instant(2024, 3, 4, 12, 0)));
    assert!(is_now_visible(day, instant(2024, 3, 4, 0, 0)));
    assert!(!is_now_visible(day, instant(2024, 3, 5, 0, 0)));
    assert!(!is_now_visible(day, instant(2024, 3, 3, 23, 59)));
}
