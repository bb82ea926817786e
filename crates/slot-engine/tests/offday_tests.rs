//! Tests for off-day filtering and splitting.
//!
//! 2026-03-02 is a Monday, so 03-06/07/08/09 are Fri/Sat/Sun/Mon.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use slot_engine::interval::Interval;
use slot_engine::offdays::drop_off_days;

fn tz(name: &str) -> Tz {
    name.parse().unwrap()
}

fn utc(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

/// Last millisecond of the given March day, UTC.
fn end_of(day: u32) -> DateTime<Utc> {
    utc(day + 1, 0, 0) - Duration::milliseconds(1)
}

fn weekend() -> BTreeSet<u8> {
    BTreeSet::from([0, 6])
}

#[test]
fn friday_to_monday_interval_splits_around_weekend() {
    let spanning = vec![Interval::new(utc(6, 8, 0), utc(9, 18, 0))];
    let kept = drop_off_days(&spanning, &weekend(), tz("UTC"));

    assert_eq!(kept.len(), 2, "weekend must split the interval in two");
    assert_eq!(kept[0], Interval::new(utc(6, 8, 0), end_of(6)));
    assert_eq!(kept[1], Interval::new(utc(9, 0, 0), utc(9, 18, 0)));

    // No piece may touch a Saturday or Sunday wall-clock day.
    for piece in &kept {
        for instant in [piece.start, piece.end] {
            let weekday = instant.with_timezone(&tz("UTC")).weekday();
            assert_ne!(weekday, Weekday::Sat);
            assert_ne!(weekday, Weekday::Sun);
        }
    }
}

#[test]
fn midweek_off_day_splits_interval() {
    // Wednesday (03-04) excluded; Tuesday-through-Thursday splits around it.
    let off = BTreeSet::from([3]);
    let spanning = vec![Interval::new(utc(3, 12, 0), utc(5, 12, 0))];
    let kept = drop_off_days(&spanning, &off, tz("UTC"));

    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0], Interval::new(utc(3, 12, 0), end_of(3)));
    assert_eq!(kept[1], Interval::new(utc(5, 0, 0), utc(5, 12, 0)));
}

#[test]
fn interval_entirely_on_off_day_is_dropped() {
    let saturday = vec![Interval::new(utc(7, 9, 0), utc(7, 17, 0))];
    let kept = drop_off_days(&saturday, &weekend(), tz("UTC"));

    assert!(kept.is_empty());
}

#[test]
fn empty_exclusion_set_still_splits_at_day_boundaries() {
    let spanning = vec![Interval::new(utc(2, 20, 0), utc(4, 6, 0))];
    let kept = drop_off_days(&spanning, &BTreeSet::new(), tz("UTC"));

    assert_eq!(kept.len(), 3);
    assert_eq!(kept[0], Interval::new(utc(2, 20, 0), end_of(2)));
    assert_eq!(kept[1], Interval::new(utc(3, 0, 0), end_of(3)));
    assert_eq!(kept[2], Interval::new(utc(4, 0, 0), utc(4, 6, 0)));
}

#[test]
fn weekday_is_judged_in_the_subject_zone() {
    // 2026-03-07 02:00-04:00 UTC is Saturday in UTC but Friday evening in
    // Los Angeles (UTC-8 before the March transition).
    let interval = vec![Interval::new(utc(7, 2, 0), utc(7, 4, 0))];

    let kept_utc = drop_off_days(&interval, &weekend(), tz("UTC"));
    assert!(kept_utc.is_empty(), "Saturday in UTC must be dropped");

    let kept_la = drop_off_days(&interval, &weekend(), tz("America/Los_Angeles"));
    assert_eq!(kept_la, interval, "Friday evening in LA must be kept");
}

#[test]
fn zero_length_boundary_piece_is_not_emitted() {
    // Ends exactly at Tuesday midnight: the Tuesday piece would be empty
    // and must not appear.
    let monday_night = vec![Interval::new(utc(2, 10, 0), utc(3, 0, 0))];
    let kept = drop_off_days(&monday_night, &BTreeSet::new(), tz("UTC"));

    assert_eq!(kept, vec![Interval::new(utc(2, 10, 0), end_of(2))]);
}

#[test]
fn malformed_intervals_are_skipped() {
    let bad = vec![Interval::new(utc(2, 12, 0), utc(2, 12, 0))];
    assert!(drop_off_days(&bad, &weekend(), tz("UTC")).is_empty());
}
