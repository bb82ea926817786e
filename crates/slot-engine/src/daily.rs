//! Per-day aggregation of free hours.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::interval::Interval;
use crate::zone::instant_on;

/// Sum free hours per subject-zone calendar day, capping each day's
/// contribution to that day's working window.
///
/// This is a deliberate second clipping pass, independent of the
/// working-hours clipper: an interval leaving the clipper can still span
/// several calendar days, and summing its raw duration would count hours
/// outside the window on interior days. Each spanned day contributes
/// `min(end, day work end) − max(start, day work start)`, clamped to zero,
/// with the day's own working-window instants resolved through the zone.
pub fn hours_by_day(
    intervals: &[Interval],
    work_start: f64,
    work_end: f64,
    tz: Tz,
) -> BTreeMap<NaiveDate, f64> {
    let mut hours: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for interval in intervals {
        if interval.is_empty() {
            continue;
        }
        let first = interval.start.with_timezone(&tz).date_naive();
        let last = interval.end.with_timezone(&tz).date_naive();

        let mut date = first;
        while date <= last {
            let cap = Interval::new(
                instant_on(date, work_start, tz),
                instant_on(date, work_end, tz),
            );
            if let Some(piece) = interval.intersect(&cap) {
                *hours.entry(date).or_insert(0.0) += piece.duration_hours();
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }
    hours
}
