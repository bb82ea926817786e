//! Cross-timezone normalization of requester-picked calendar dates.
//!
//! A calendar date chosen by the requester (e.g. "Jan 4") can already be a
//! different calendar date for the subject at the same instant. The
//! normalizer anchors the requester's dates to instants in the requester's
//! zone and reads them back in the subject's zone, shifting either boundary
//! by up to a day.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::interval::Interval;
use crate::zone::{day_end, day_start};

/// Parse a strict `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns `EngineError::InvalidDate` naming `field` for anything that is not
/// exactly a four-digit year, two-digit month, two-digit day date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    if value.len() != 10 {
        return Err(EngineError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Compute the calendar-date range as the subject experiences it.
///
/// The start date is anchored at requester-local midnight and the end date at
/// requester-local 23:59:59.999; both are converted through UTC into the
/// subject's zone to read off the subject's calendar dates. With no requester
/// zone, or the same zone on both sides, the dates pass through unchanged.
pub fn normalize_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    requester_tz: Option<Tz>,
    subject_tz: Tz,
) -> (NaiveDate, NaiveDate) {
    match requester_tz {
        Some(req_tz) if req_tz != subject_tz => {
            let start = day_start(start_date, req_tz)
                .with_timezone(&subject_tz)
                .date_naive();
            let end = day_end(end_date, req_tz)
                .with_timezone(&subject_tz)
                .date_naive();
            (start, end)
        }
        _ => (start_date, end_date),
    }
}

/// The UTC window spanning local midnight of `start` through the last
/// millisecond of `end` in the subject's zone.
pub fn bounding_window(start: NaiveDate, end: NaiveDate, subject_tz: Tz) -> Interval {
    Interval::new(day_start(start, subject_tz), day_end(end, subject_tz))
}
