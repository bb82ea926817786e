//! Request model, expected working days, and the availability decision.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::daily::hours_by_day;
use crate::daterange::{bounding_window, normalize_range, parse_date};
use crate::error::{EngineError, Result};
use crate::freebusy::free_slots;
use crate::interval::Interval;
use crate::offdays::drop_off_days;
use crate::workhours::clip_to_working_hours;
use crate::zone::hours_of;

/// Scheduling constraints for one availability check.
///
/// Everything except the date range has a documented default, applied both by
/// the constructors here and by serde when the field is absent from a JSON
/// request. The date range is inclusive and expressed in the requester's
/// zone when one is given, otherwise in the subject's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// IANA zone the subject lives and works in.
    #[serde(default = "default_timezone")]
    pub subject_timezone: String,
    /// Zone the requester picked the dates in, when different from the
    /// subject's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_timezone: Option<String>,
    /// First calendar day of the range, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last calendar day of the range (inclusive), `YYYY-MM-DD`.
    pub end_date: String,
    /// Daily working window start, `HH:mm` wall clock in the subject's zone.
    #[serde(default = "default_work_start")]
    pub working_hours_start: String,
    /// Daily working window end, `HH:mm`.
    #[serde(default = "default_work_end")]
    pub working_hours_end: String,
    /// Minimum free hours every expected working day must clear.
    #[serde(default = "default_min_hours")]
    pub min_hours_per_day: f64,
    /// Excluded weekdays, 0 = Sunday .. 6 = Saturday.
    #[serde(default = "default_off_days")]
    pub off_days: BTreeSet<u8>,
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}

fn default_work_start() -> String {
    "08:00".to_string()
}

fn default_work_end() -> String {
    "18:00".to_string()
}

fn default_min_hours() -> f64 {
    8.0
}

fn default_off_days() -> BTreeSet<u8> {
    BTreeSet::from([0, 6])
}

impl Request {
    /// A request for the given inclusive date range with every other
    /// parameter at its default.
    pub fn for_range(start_date: &str, end_date: &str) -> Self {
        Self {
            subject_timezone: default_timezone(),
            requester_timezone: None,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            working_hours_start: default_work_start(),
            working_hours_end: default_work_end(),
            min_hours_per_day: default_min_hours(),
            off_days: default_off_days(),
        }
    }
}

/// The outcome of one availability computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// `true` iff every expected working day clears the minimum.
    pub is_available: bool,
    /// Free intervals after off-day filtering and working-hours clipping:
    /// chronological, non-overlapping, inside the bounding window.
    pub free_slots: Vec<Interval>,
    /// Sum of `hours_per_day` values — not the raw duration of `free_slots`.
    pub total_free_hours: f64,
    /// Size of the expected working-days set, for reporting.
    pub working_days_count: usize,
    /// Free hours per subject-zone calendar day. Only days from the expected
    /// working-days set appear; a missing expected day counts as zero.
    pub hours_per_day: BTreeMap<NaiveDate, f64>,
}

/// Every calendar day in `[start, end]` whose weekday is not excluded.
pub fn expected_working_days(
    start: NaiveDate,
    end: NaiveDate,
    off_days: &BTreeSet<u8>,
) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut date = start;
    while date <= end {
        if !off_days.contains(&(date.weekday().num_days_from_sunday() as u8)) {
            days.push(date);
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Decide whether a subject has enough free working capacity in a date range.
///
/// The pipeline: normalize the requester's dates into the subject's zone,
/// derive the free complement of `busy` inside the bounding window, drop
/// off-day portions, clip to the working window, aggregate hours per day,
/// then require every expected working day to reach `min_hours_per_day` —
/// a single deficient day fails the whole range.
///
/// The computation is pure: no clock reads, no I/O, no state across calls.
///
/// # Errors
/// Returns [`EngineError::InvalidTimezone`] for unknown IANA zone names and
/// [`EngineError::InvalidDate`] for date strings that are not `YYYY-MM-DD`.
/// Busy intervals with `end <= start` are excluded, not errors; an empty
/// busy list is the ordinary all-free case.
pub fn compute_availability(busy: &[Interval], request: &Request) -> Result<Availability> {
    let subject_tz: Tz = request
        .subject_timezone
        .parse()
        .map_err(|_| EngineError::InvalidTimezone(request.subject_timezone.clone()))?;
    let requester_tz = match &request.requester_timezone {
        Some(name) => Some(
            name.parse::<Tz>()
                .map_err(|_| EngineError::InvalidTimezone(name.clone()))?,
        ),
        None => None,
    };

    let start = parse_date("start_date", &request.start_date)?;
    let end = parse_date("end_date", &request.end_date)?;
    let (start, end) = normalize_range(start, end, requester_tz, subject_tz);

    let window = bounding_window(start, end, subject_tz);
    let work_start = hours_of(&request.working_hours_start);
    let work_end = hours_of(&request.working_hours_end);

    let free = free_slots(busy, window.start, window.end);
    let on_days = drop_off_days(&free, &request.off_days, subject_tz);
    let clipped = clip_to_working_hours(&on_days, work_start, work_end, subject_tz);
    let hours_per_day = hours_by_day(&clipped, work_start, work_end, subject_tz);

    let expected = expected_working_days(start, end, &request.off_days);
    let is_available = expected.iter().all(|day| {
        hours_per_day.get(day).copied().unwrap_or(0.0) >= request.min_hours_per_day
    });
    let total_free_hours: f64 = hours_per_day.values().sum();

    Ok(Availability {
        is_available,
        free_slots: clipped,
        total_free_hours,
        working_days_count: expected.len(),
        hours_per_day,
    })
}
