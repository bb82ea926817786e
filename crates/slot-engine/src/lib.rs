//! # slot-engine
//!
//! Timezone-correct availability computation for calendar booking.
//!
//! Given a subject's busy intervals (already fetched from their calendar
//! provider) and a set of scheduling constraints, the engine decides whether
//! the subject has enough free working capacity in a date range and produces
//! an exact per-day breakdown of free hours. It reconciles three moving
//! reference frames — UTC instants, the requester's wall-clock calendar
//! dates, and the subject's calendar dates and working hours — across
//! midnights, off-days, and DST transitions, without losing or
//! double-counting a minute.
//!
//! The engine is a pure function: no I/O, no clock reads, no caches.
//! Identical inputs always produce the identical result, and concurrent
//! calls share nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{compute_availability, Request};
//!
//! // A Monday-to-Friday range with no busy intervals: every working day has
//! // the full 08:00-18:00 window free.
//! let request = Request::for_range("2026-03-02", "2026-03-06");
//! let result = compute_availability(&[], &request).unwrap();
//! assert!(result.is_available);
//! assert_eq!(result.working_days_count, 5);
//! ```
//!
//! ## Modules
//!
//! - [`zone`] — wall-clock primitives for a target IANA timezone
//! - [`daterange`] — requester→subject date normalization, bounding window
//! - [`freebusy`] — free-slot derivation (complement of busy time)
//! - [`offdays`] — excluded-weekday filtering and splitting
//! - [`workhours`] — clipping to the daily working window
//! - [`daily`] — per-day free-hour aggregation
//! - [`availability`] — request model and the pass/fail decision
//! - [`error`] — error types

pub mod availability;
pub mod daily;
pub mod daterange;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod offdays;
pub mod workhours;
pub mod zone;

pub use availability::{compute_availability, Availability, Request};
pub use error::EngineError;
pub use freebusy::free_slots;
pub use interval::Interval;
