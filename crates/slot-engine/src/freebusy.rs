//! Free-slot derivation: the complement of busy time within a window.

use chrono::{DateTime, Utc};

use crate::interval::Interval;

/// Compute the free complement of `busy` within `[window_start, window_end)`.
///
/// Busy intervals may arrive in any order and may overlap. A single sweep
/// with a covered-until watermark emits a gap whenever a busy start exceeds
/// the watermark and advances the watermark with `max`, which absorbs
/// overlapping busy intervals without a separate merge pass. Malformed
/// intervals (`end <= start`) and intervals outside the window are dropped;
/// intervals crossing the window edge are clipped to it.
///
/// Returns minimal, non-overlapping free intervals in chronological order.
/// A busy interval covering the whole window yields no free intervals.
pub fn free_slots(
    busy: &[Interval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<Interval> {
    let window = Interval::new(window_start, window_end);
    if window.is_empty() {
        return Vec::new();
    }

    let mut clipped: Vec<Interval> = busy
        .iter()
        .filter(|b| !b.is_empty())
        .filter_map(|b| b.intersect(&window))
        .collect();

    if clipped.is_empty() {
        return vec![window];
    }

    clipped.sort_by_key(|b| (b.start, b.end));

    let mut free = Vec::new();
    let mut watermark = window_start;
    for b in &clipped {
        if b.start > watermark {
            free.push(Interval::new(watermark, b.start));
        }
        watermark = watermark.max(b.end);
    }
    if watermark < window_end {
        free.push(Interval::new(watermark, window_end));
    }
    free
}
