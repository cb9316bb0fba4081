//! Consumer-side checks on a full week.
//!
//! [`extract`](crate::extract) writes whatever times the text contains,
//! including an end before its start. The booking form rejects those before
//! saving; [`WeeklyAvailability::validate`] reports them.

use thiserror::Error;

use crate::availability::{DailyAvailability, Time, TimeSlot, WeeklyAvailability};
use crate::weekday::Weekday;

/// Which of a day's two slots an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotName {
    Slot1,
    Slot2,
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotName::Slot1 => f.write_str("slot1"),
            SlotName::Slot2 => f.write_str("slot2"),
        }
    }
}

/// A problem with one slot of one day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotIssue {
    #[error("{day} {slot}: end {end} is not after start {start}")]
    EndNotAfterStart {
        day: Weekday,
        slot: SlotName,
        start: Time,
        end: Time,
    },

    #[error("{day} {slot}: start {start} has no end")]
    MissingEnd {
        day: Weekday,
        slot: SlotName,
        start: Time,
    },

    #[error("{day} {slot}: end {end} has no start")]
    MissingStart {
        day: Weekday,
        slot: SlotName,
        end: Time,
    },

    #[error("{day} {slot}: {time} is not a valid time of day")]
    OutOfRange {
        day: Weekday,
        slot: SlotName,
        time: Time,
    },
}

impl WeeklyAvailability {
    /// Every issue in the week, in day then slot order. Empty when valid.
    ///
    /// ```
    /// use schedule_extractor::{extract, WeeklyAvailability};
    ///
    /// let week = WeeklyAvailability::default().merged(&extract("domingo das 23 as 7"));
    /// let issues = week.validate();
    /// assert_eq!(issues.len(), 1);
    /// assert_eq!(issues[0].to_string(), "sunday slot1: end 07:00 is not after start 23:00");
    /// ```
    pub fn validate(&self) -> Vec<SlotIssue> {
        self.iter()
            .flat_map(|(day, daily)| validate_day(day, daily))
            .collect()
    }
}

fn validate_day(day: Weekday, daily: &DailyAvailability) -> Vec<SlotIssue> {
    let mut issues = validate_slot(day, SlotName::Slot1, &daily.slot1);
    issues.extend(validate_slot(day, SlotName::Slot2, &daily.slot2));
    issues
}

fn validate_slot(day: Weekday, slot: SlotName, value: &TimeSlot) -> Vec<SlotIssue> {
    let out_of_range: Vec<SlotIssue> = [value.start, value.end]
        .into_iter()
        .flatten()
        .filter(|time| time.to_naive().is_none())
        .map(|time| SlotIssue::OutOfRange { day, slot, time })
        .collect();
    if !out_of_range.is_empty() {
        return out_of_range;
    }

    match (value.start, value.end) {
        (Some(start), Some(end)) if end <= start => {
            vec![SlotIssue::EndNotAfterStart {
                day,
                slot,
                start,
                end,
            }]
        }
        (Some(start), None) => vec![SlotIssue::MissingEnd { day, slot, start }],
        (None, Some(end)) => vec![SlotIssue::MissingStart { day, slot, end }],
        _ => Vec::new(),
    }
}
