//! Clipping intervals to the daily working window.

use chrono_tz::Tz;

use crate::interval::Interval;
use crate::zone::{instant_at_hour, wall_clock};

/// Trim each interval to the `[work_start, work_end)` wall-clock window of
/// the subject's zone, given as decimal hours. Intervals with no overlap
/// with the window are dropped.
///
/// Boundary instants are reconstructed through the zone itself via
/// [`instant_at_hour`], so the clip stays correct on DST-transition days
/// where the UTC offset of the working-window boundary differs from the
/// offset at the interval's own start or end.
///
/// Re-running the clipper on its own output changes nothing: a clipped start
/// reads exactly `work_start` on the clock and a clipped end exactly
/// `work_end`, and neither triggers another clip.
pub fn clip_to_working_hours(
    intervals: &[Interval],
    work_start: f64,
    work_end: f64,
    tz: Tz,
) -> Vec<Interval> {
    let mut clipped = Vec::new();
    for interval in intervals {
        if interval.is_empty() {
            continue;
        }
        let (sh, sm) = wall_clock(interval.start, tz);
        let (eh, em) = wall_clock(interval.end, tz);
        let start_hours = f64::from(sh) + f64::from(sm) / 60.0;
        let end_hours = f64::from(eh) + f64::from(em) / 60.0;

        // Entirely before or after the working window.
        if end_hours <= work_start || start_hours >= work_end {
            continue;
        }

        let start = if start_hours < work_start {
            instant_at_hour(interval.start, work_start, tz)
        } else {
            interval.start
        };
        let end = if end_hours > work_end {
            instant_at_hour(interval.end, work_end, tz)
        } else {
            interval.end
        };

        let piece = Interval::new(start, end);
        if !piece.is_empty() {
            clipped.push(piece);
        }
    }
    clipped
}
