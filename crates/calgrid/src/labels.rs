//! Display text for dates, weekdays, and months.
//!
//! One English table; locales that need different (or inflected) forms swap
//! this module out. Selection semantics never depend on these strings.

use chrono::{Datelike, Days, NaiveDate, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name, 1-based (1 = January). Empty string outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("")
}

/// Full weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Abbreviated weekday name used in column headers.
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Relative label for a date near `today`: `"Today"`, `"Yesterday"`,
/// `"Tomorrow"`, otherwise `"D Month"`.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        "Tomorrow".to_string()
    } else {
        format!("{} {}", date.day(), month_name(date.month()))
    }
}

/// Long-form date label, `"D Month YYYY"`.
pub fn long_date_label(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}
