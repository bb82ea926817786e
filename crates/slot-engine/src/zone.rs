//! Wall-clock primitives for a target IANA timezone.
//!
//! Every wall-clock component here is resolved *through the subject's zone*
//! and converted back to a UTC instant. Setting date fields naively would use
//! the host zone instead and silently corrupt results — all boundary
//! reconstruction in the pipeline goes through [`instant_on`].

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Parse an `HH:mm` string into decimal hours (`"09:30"` → `9.5`).
///
/// Malformed input degrades to `0.0` rather than erroring; an all-zero work
/// window is a caller bug the result makes visible, not an engine fault.
pub fn hours_of(time: &str) -> f64 {
    let mut parts = time.splitn(2, ':');
    let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.parse::<u32>().ok());
    match (hour, minute) {
        (Some(h), Some(m)) if h <= 24 && m < 60 => f64::from(h) + f64::from(m) / 60.0,
        _ => 0.0,
    }
}

/// The UTC instant of wall-clock `hour` (fractional) on a local calendar date.
///
/// The UTC offset applied is the one `tz` uses *on that date*, so the result
/// stays correct across DST changes. A spring-forward gap resolves one hour
/// later; an ambiguous fall-back time takes the earlier offset.
pub fn instant_on(date: NaiveDate, hour: f64, tz: Tz) -> DateTime<Utc> {
    let minutes = (hour * 60.0).round() as i64;
    let naive = date.and_time(NaiveTime::MIN) + Duration::minutes(minutes);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => {
            // The wall clock skips this time; land just after the gap.
            let shifted = naive + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&shifted))
                .with_timezone(&Utc)
        }
    }
}

/// The instant at wall-clock `hour` on the calendar date that `reference`
/// falls on in `tz`.
pub fn instant_at_hour(reference: DateTime<Utc>, hour: f64, tz: Tz) -> DateTime<Utc> {
    instant_on(reference.with_timezone(&tz).date_naive(), hour, tz)
}

/// The hour and minute an observer in `tz` reads off a clock at `instant`.
pub fn wall_clock(instant: DateTime<Utc>, tz: Tz) -> (u32, u32) {
    let local = instant.with_timezone(&tz);
    (local.hour(), local.minute())
}

/// UTC instant of the local midnight opening `date` in `tz`.
pub fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    instant_on(date, 0.0, tz)
}

/// UTC instant of the last millisecond of `date` in `tz`.
///
/// One millisecond short of the next midnight, so the instant still reads as
/// 23:59 *on this date* when converted back to wall-clock time.
pub fn day_end(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let next = date.succ_opt().expect("valid successor date");
    day_start(next, tz) - Duration::milliseconds(1)
}
