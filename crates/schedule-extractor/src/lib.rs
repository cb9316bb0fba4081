//! # schedule-extractor
//!
//! Turns free-form Portuguese availability text such as
//! `"De segunda a quarta das 20h às 23h, domingo das 8 as 12 e das 18 as 23"`
//! into a structured weekly grid with two time slots per day.
//!
//! Extraction is best-effort and total: [`extract`] never fails, and text it
//! does not understand simply contributes nothing. The result is sparse, so a
//! caller merges it onto the week it already holds with
//! [`WeeklyAvailability::merge`] and validates the outcome with
//! [`WeeklyAvailability::validate`].
//!
//! ## Modules
//!
//! - [`weekday`] — `Weekday` and the Portuguese day-name synonym table
//! - [`availability`] — `Time`, slots, partial and full weekly grids, merging
//! - [`lexer`] — tokenizer for availability text
//! - [`rules`] — the range, single-day and continuation phrase matchers
//! - [`extractor`] — applies the rules in order to build the result
//! - [`validate`] — consumer-side slot checks
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod extractor;
pub mod lexer;
pub mod rules;
pub mod validate;
pub mod weekday;

pub use availability::{
    DailyAvailability, PartialWeeklyAvailability, Time, TimeSlot, WeeklyAvailability,
};
pub use error::ScheduleError;
pub use extractor::extract;
pub use rules::{Rule, RuleMatch};
pub use validate::{SlotIssue, SlotName};
pub use weekday::Weekday;
