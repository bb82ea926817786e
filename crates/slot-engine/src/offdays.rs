//! Off-day filtering: drop interval portions that fall on excluded weekdays.

use std::collections::BTreeSet;

use chrono::Datelike;
use chrono_tz::Tz;

use crate::interval::Interval;
use crate::zone::{day_end, day_start};

/// Remove every portion of `intervals` that falls, in `tz`, on a weekday in
/// `off_days` (0 = Sunday .. 6 = Saturday).
///
/// Each interval is split at the subject-zone day boundaries it spans: kept
/// days emit the overlap of the interval with that local day, excluded days
/// are dropped entirely. An off-day in the middle of a multi-day interval
/// therefore splits it into the pieces on either side. Zero-length pieces
/// are not emitted. The split happens even with an empty exclusion set —
/// later stages rely on receiving day-bounded pieces.
pub fn drop_off_days(intervals: &[Interval], off_days: &BTreeSet<u8>, tz: Tz) -> Vec<Interval> {
    let mut kept = Vec::new();
    for interval in intervals {
        if interval.is_empty() {
            continue;
        }
        let first = interval.start.with_timezone(&tz).date_naive();
        let last = interval.end.with_timezone(&tz).date_naive();

        let mut date = first;
        while date <= last {
            let weekday = date.weekday().num_days_from_sunday() as u8;
            if !off_days.contains(&weekday) {
                let piece = Interval::new(
                    interval.start.max(day_start(date, tz)),
                    interval.end.min(day_end(date, tz)),
                );
                if !piece.is_empty() {
                    kept.push(piece);
                }
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }
    kept
}
