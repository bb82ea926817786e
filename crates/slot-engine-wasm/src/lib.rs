//! WASM bindings for slot-engine.
//!
//! Exposes availability computation and free-slot derivation to JavaScript
//! via `wasm-bindgen`. All complex types are passed as JSON strings: busy
//! intervals and requests come in as JSON, results go back out as JSON with
//! RFC 3339 datetimes and `YYYY-MM-DD` day keys.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use slot_engine::{Availability, Interval, Request};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct IntervalDto {
    start: String,
    end: String,
}

impl From<&Interval> for IntervalDto {
    fn from(i: &Interval) -> Self {
        Self {
            start: i.start.to_rfc3339(),
            end: i.end.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct AvailabilityDto {
    is_available: bool,
    free_slots: Vec<IntervalDto>,
    total_free_hours: f64,
    working_days_count: usize,
    hours_per_day: BTreeMap<String, f64>,
}

impl From<&Availability> for AvailabilityDto {
    fn from(a: &Availability) -> Self {
        Self {
            is_available: a.is_available,
            free_slots: a.free_slots.iter().map(IntervalDto::from).collect(),
            total_free_hours: a.total_free_hours,
            working_days_count: a.working_days_count,
            hours_per_day: a
                .hours_per_day
                .iter()
                .map(|(date, hours)| (date.format("%Y-%m-%d").to_string(), *hours))
                .collect(),
        }
    }
}

/// Input format for busy intervals passed from JavaScript.
#[derive(Deserialize)]
struct IntervalInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-02-17T14:00:00Z")
/// and naive local time (e.g., "2026-02-17T14:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a JSON array of `{start, end}` objects into `Vec<Interval>`.
fn parse_intervals_json(json: &str) -> Result<Vec<Interval>, JsValue> {
    let inputs: Vec<IntervalInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid busy-intervals JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(Interval::new(start, end))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Decide whether a subject has enough free working capacity in a date range.
///
/// `busy_json` must be a JSON array of `{start, end}` objects with ISO 8601
/// datetime strings; `request_json` a JSON object matching the engine's
/// request shape (`start_date`/`end_date` required, everything else has
/// documented defaults). Returns a JSON string with `is_available`,
/// `free_slots`, `total_free_hours`, `working_days_count`, and a
/// `hours_per_day` object keyed by `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability(busy_json: &str, request_json: &str) -> Result<String, JsValue> {
    let busy = parse_intervals_json(busy_json)?;
    let request: Request = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    let result = slot_engine::compute_availability(&busy, &request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&AvailabilityDto::from(&result))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compute the free complement of busy intervals within a time window.
///
/// `busy_json` must be a JSON array of `{start, end}` objects; `window_start`
/// and `window_end` are ISO 8601 datetime strings. Returns a JSON string
/// containing an array of `{start, end}` objects.
#[wasm_bindgen(js_name = "findFreeSlots")]
pub fn find_free_slots(
    busy_json: &str,
    window_start: &str,
    window_end: &str,
) -> Result<String, JsValue> {
    let busy = parse_intervals_json(busy_json)?;
    let ws = parse_datetime(window_start)?;
    let we = parse_datetime(window_end)?;

    let slots = slot_engine::free_slots(&busy, ws, we);
    let dtos: Vec<IntervalDto> = slots.iter().map(IntervalDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
