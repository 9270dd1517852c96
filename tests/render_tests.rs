//! Tests for Go layout rendering.

use chrono::{FixedOffset, TimeZone, Utc};
use momentgo::format_datetime;

#[test]
fn test_date_tokens() {
    let t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "2006-01-02"), "2023-01-01");
    assert_eq!(format_datetime(&t, "1/2/06"), "1/1/23");
}

#[test]
fn test_time_tokens() {
    let t = Utc.with_ymd_and_hms(2023, 6, 15, 13, 5, 9).unwrap();
    assert_eq!(format_datetime(&t, "15:04:05"), "13:05:09");
    assert_eq!(format_datetime(&t, "3:04 PM"), "1:05 PM");
    assert_eq!(format_datetime(&t, "3:04 pm"), "1:05 pm");
}

#[test]
fn test_midnight_renders_as_twelve_am() {
    let t = Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "3:04 PM"), "12:00 AM");
}

#[test]
fn test_noon_renders_as_twelve_pm() {
    let t = Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "3:04 PM"), "12:00 PM");
}

#[test]
fn test_name_tokens() {
    // 2023-01-02 is a Monday.
    let t = Utc.with_ymd_and_hms(2023, 1, 2, 15, 30, 45).unwrap();
    assert_eq!(
        format_datetime(&t, "Monday Jan 2 15:04:05 2006"),
        "Monday Jan 2 15:30:45 2023"
    );

    // 2023-09-09 is a Saturday.
    let t = Utc.with_ymd_and_hms(2023, 9, 9, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "Mon, 02 January"), "Sat, 09 September");
}

#[test]
fn test_zone_tokens() {
    let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let t = tz.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "-0700"), "+0530");
    assert_eq!(format_datetime(&t, "-07:00"), "+05:30");

    let t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "-0700"), "+0000");

    let tz = FixedOffset::west_opt(7 * 3600).unwrap();
    let t = tz.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(format_datetime(&t, "2006-01-02T15:04:05-07:00"), "2023-01-01T00:00:00-07:00");
}

#[test]
fn test_two_digit_year() {
    let t = Utc.with_ymd_and_hms(2009, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(format_datetime(&t, "06"), "09");
    assert_eq!(format_datetime(&t, "2006"), "2009");
}

#[test]
fn test_literals_pass_through() {
    let t = Utc.with_ymd_and_hms(2023, 8, 7, 10, 20, 30).unwrap();
    assert_eq!(format_datetime(&t, "[] week!"), "[] week!");
    assert_eq!(format_datetime(&t, "2006年01月02日"), "2023年08月07日");
}
