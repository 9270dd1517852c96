//! Rendering timestamps through Go layout strings.
//!
//! This is the formatting primitive behind [`crate::Converter::format`]: it
//! gives the Go reference-date tokens their meaning against a concrete
//! instant. Only the tokens the converter can emit are recognized;
//! everything else in the layout is literal text.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// One calendar field of the Go reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutPart {
    WeekdayFull,   // Monday
    WeekdayAbbr,   // Mon
    MonthFull,     // January
    MonthAbbr,     // Jan
    Year4,         // 2006
    Year2,         // 06
    Month2,        // 01
    Month,         // 1
    Day2,          // 02
    Day,           // 2
    Hour24,        // 15
    Hour12,        // 3
    Minute2,       // 04
    Minute,        // 4
    Second2,       // 05
    Second,        // 5
    AmPmUpper,     // PM
    AmPmLower,     // pm
    OffsetNumeric, // -0700
    OffsetColon,   // -07:00
}

/// Go reference-date tokens. Longer tokens precede the shorter tokens they
/// start with, same discipline as the conversion table.
const LAYOUT_TOKENS: &[(&str, LayoutPart)] = &[
    ("Monday", LayoutPart::WeekdayFull),
    ("Mon", LayoutPart::WeekdayAbbr),
    ("January", LayoutPart::MonthFull),
    ("Jan", LayoutPart::MonthAbbr),
    ("2006", LayoutPart::Year4),
    ("15", LayoutPart::Hour24),
    ("01", LayoutPart::Month2),
    ("02", LayoutPart::Day2),
    ("04", LayoutPart::Minute2),
    ("05", LayoutPart::Second2),
    ("06", LayoutPart::Year2),
    ("-07:00", LayoutPart::OffsetColon),
    ("-0700", LayoutPart::OffsetNumeric),
    ("1", LayoutPart::Month),
    ("2", LayoutPart::Day),
    ("3", LayoutPart::Hour12),
    ("4", LayoutPart::Minute),
    ("5", LayoutPart::Second),
    ("PM", LayoutPart::AmPmUpper),
    ("pm", LayoutPart::AmPmLower),
];

const DAY_NAMES_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const DAY_NAMES_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES_FULL: [&str; 12] = [
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
const MONTH_NAMES_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders a timestamp as text using a Go layout string.
///
/// Total over all layouts: unrecognized characters are copied through
/// unchanged.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use momentgo::format_datetime;
///
/// let t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(format_datetime(&t, "2006-01-02"), "2023-01-01");
/// ```
pub fn format_datetime<Tz: TimeZone>(t: &DateTime<Tz>, go_layout: &str) -> String {
    let offset_seconds = t.offset().fix().local_minus_utc();
    let mut out = String::with_capacity(go_layout.len());
    let mut rest = go_layout;

    while !rest.is_empty() {
        match LAYOUT_TOKENS.iter().find(|(pat, _)| rest.starts_with(pat)) {
            Some((pat, part)) => {
                out.push_str(&format_layout_part(*part, t, offset_seconds));
                rest = &rest[pat.len()..];
            }
            None => {
                let ch = rest.chars().next().unwrap(); // rest is non-empty
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

/// Formats a single layout token against the timestamp's components.
fn format_layout_part<Tz: TimeZone>(
    part: LayoutPart,
    t: &DateTime<Tz>,
    offset_seconds: i32,
) -> String {
    match part {
        LayoutPart::WeekdayFull => {
            DAY_NAMES_FULL[t.weekday().num_days_from_sunday() as usize].to_string()
        }
        LayoutPart::WeekdayAbbr => {
            DAY_NAMES_ABBR[t.weekday().num_days_from_sunday() as usize].to_string()
        }
        LayoutPart::MonthFull => MONTH_NAMES_FULL[(t.month() - 1) as usize].to_string(),
        LayoutPart::MonthAbbr => MONTH_NAMES_ABBR[(t.month() - 1) as usize].to_string(),
        LayoutPart::Year4 => format!("{:04}", t.year()),
        LayoutPart::Year2 => format!("{:02}", t.year().rem_euclid(100)),
        LayoutPart::Month2 => format!("{:02}", t.month()),
        LayoutPart::Month => format!("{}", t.month()),
        LayoutPart::Day2 => format!("{:02}", t.day()),
        LayoutPart::Day => format!("{}", t.day()),
        LayoutPart::Hour24 => format!("{:02}", t.hour()),
        LayoutPart::Hour12 => format!("{}", t.hour12().1),
        LayoutPart::Minute2 => format!("{:02}", t.minute()),
        LayoutPart::Minute => format!("{}", t.minute()),
        LayoutPart::Second2 => format!("{:02}", t.second()),
        LayoutPart::Second => format!("{}", t.second()),
        LayoutPart::AmPmUpper => if t.hour12().0 { "PM" } else { "AM" }.to_string(),
        LayoutPart::AmPmLower => if t.hour12().0 { "pm" } else { "am" }.to_string(),
        LayoutPart::OffsetNumeric => format_offset(offset_seconds, false),
        LayoutPart::OffsetColon => format_offset(offset_seconds, true),
    }
}

/// Formats a UTC offset as `+0900` or, with `colon`, `+09:00`.
fn format_offset(offset_seconds: i32, colon: bool) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.abs() / 60;
    if colon {
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    } else {
        format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
    }
}
