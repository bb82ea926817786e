//! Error types for availability computation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A request date string was not a strict `YYYY-MM-DD` calendar date.
    #[error("Invalid {field} date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
