//! Tests for working-hours clipping.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use slot_engine::interval::Interval;
use slot_engine::workhours::clip_to_working_hours;

fn tz(name: &str) -> Tz {
    name.parse().unwrap()
}

fn utc(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

#[test]
fn clips_both_ends_to_the_window() {
    let intervals = vec![Interval::new(utc(2, 5, 0), utc(2, 20, 0))];
    let clipped = clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC"));

    assert_eq!(clipped, vec![Interval::new(utc(2, 8, 0), utc(2, 18, 0))]);
}

#[test]
fn interval_inside_window_is_untouched() {
    let intervals = vec![Interval::new(utc(2, 9, 30), utc(2, 12, 45))];
    let clipped = clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC"));

    assert_eq!(clipped, intervals);
}

#[test]
fn intervals_outside_the_window_are_dropped() {
    let intervals = vec![
        // Ends exactly at the window start — no overlap.
        Interval::new(utc(2, 6, 0), utc(2, 8, 0)),
        // Starts exactly at the window end — no overlap.
        Interval::new(utc(2, 18, 0), utc(2, 21, 0)),
    ];
    let clipped = clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC"));

    assert!(clipped.is_empty());
}

#[test]
fn fractional_window_boundaries_are_respected() {
    // 08:30-17:15 window.
    let intervals = vec![Interval::new(utc(2, 8, 0), utc(2, 18, 0))];
    let clipped = clip_to_working_hours(&intervals, 8.5, 17.25, tz("UTC"));

    assert_eq!(clipped, vec![Interval::new(utc(2, 8, 30), utc(2, 17, 15))]);
}

#[test]
fn clipping_is_idempotent() {
    let intervals = vec![
        Interval::new(utc(2, 5, 0), utc(2, 20, 0)),
        Interval::new(utc(3, 9, 0), utc(3, 12, 0)),
        Interval::new(utc(4, 16, 0), utc(4, 23, 59)),
    ];
    let once = clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC"));
    let twice = clip_to_working_hours(&once, 8.0, 18.0, tz("UTC"));

    assert_eq!(once, twice);
}

#[test]
fn day_end_millisecond_is_clipped_away() {
    // A day piece ends at 23:59:59.999; its end reads 23:59 on the wall
    // clock and clips back to 18:00 on the same date.
    let end = utc(3, 0, 0) - Duration::milliseconds(1);
    let intervals = vec![Interval::new(utc(2, 10, 0), end)];
    let clipped = clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC"));

    assert_eq!(clipped, vec![Interval::new(utc(2, 10, 0), utc(2, 18, 0))]);
}

#[test]
fn boundaries_resolve_through_the_zone_on_a_dst_day() {
    // 2026-03-08, America/Los_Angeles: clocks jump 02:00 -> 03:00. The
    // local day runs 08:00Z (midnight PST) to 07:00Z next day (midnight
    // PDT). Clipping a full-day piece to 08:00-18:00 must use the *post-
    // transition* offset for both boundaries.
    let la = tz("America/Los_Angeles");
    let day = Interval::new(
        Utc.with_ymd_and_hms(2026, 3, 8, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 9, 7, 0, 0).unwrap() - Duration::milliseconds(1),
    );
    let clipped = clip_to_working_hours(&[day], 8.0, 18.0, la);

    assert_eq!(
        clipped,
        vec![Interval::new(
            // 08:00 PDT (UTC-7), not 08:00 PST.
            Utc.with_ymd_and_hms(2026, 3, 8, 15, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 9, 1, 0, 0).unwrap(),
        )]
    );
    // The working window itself is unaffected by the shortened day.
    assert_eq!(clipped[0].duration_hours(), 10.0);
}

#[test]
fn malformed_intervals_are_skipped() {
    let intervals = vec![Interval::new(utc(2, 12, 0), utc(2, 9, 0))];
    assert!(clip_to_working_hours(&intervals, 8.0, 18.0, tz("UTC")).is_empty());
}
