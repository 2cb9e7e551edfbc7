//! Clock-face formatting and the current-time indicator.
//!
//! The engine exposes only the pure computations. Re-polling "now" once a
//! minute and scrolling the indicator into view are the renderer's job, so
//! `now` is always an explicit parameter.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::layout::vertical_offset;

/// Format an instant as a zero-padded 24-hour `"HH:MM"` clock face.
/// A missing instant formats as `"00:00"`.
pub fn format_clock(instant: Option<NaiveDateTime>) -> String {
    match instant {
        Some(t) => format!("{:02}:{:02}", t.time().hour(), t.time().minute()),
        None => "00:00".to_string(),
    }
}

/// Minutes since local midnight of `now`: the indicator's position on the
/// 1440-unit axis.
pub fn now_offset(now: NaiveDateTime) -> i64 {
    vertical_offset(now)
}

/// Whether the current-time indicator belongs on `day`'s column.
pub fn is_now_visible(day: NaiveDate, now: NaiveDateTime) -> bool {
    now.date() == day
}
