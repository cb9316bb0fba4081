//! Error types for schedule-extractor operations.
//!
//! [`extract`](crate::extract) never returns these: unrecognized text simply
//! contributes nothing. They surface only when parsing values that arrive
//! already structured (a stored week, a `"HH:MM"` string from a form).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
