//! The weekly availability data model.
//!
//! Two shapes share the same per-day type:
//!
//! - [`PartialWeeklyAvailability`]: what [`extract`](crate::extract) returns.
//!   Sparse: only days the text mentioned are present.
//! - [`WeeklyAvailability`]: the full seven-day grid a booking form holds.
//!   A partial result is applied to it with [`WeeklyAvailability::merge`].
//!
//! Serialized field names and the `""` encoding for unset times match the
//! JSON the booking form stores.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;
use crate::weekday::Weekday;

// ── Time ────────────────────────────────────────────────────────────────────

/// A 24-hour wall-clock time rendered as `HH:MM`.
///
/// Values come straight from the text, so `Time` can hold an hour such as 27
/// that is not a real clock time. Use [`Time::to_naive`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// On-the-hour time (`20h` → `20:00`).
    pub fn on_the_hour(hour: u8) -> Self {
        Self { hour, minute: 0 }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The equivalent `NaiveTime`, or `None` when the hour or minute is out of range.
    pub fn to_naive(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = ScheduleError;

    /// Parse the canonical `HH:MM` form (two-digit hour and minute).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(format!("expected HH:MM, got '{s}'"));

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = h.parse().map_err(|_| invalid())?;
        let minute = m.parse().map_err(|_| invalid())?;
        Ok(Time { hour, minute })
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter: `None` ⇄ `""`.
mod optional_time {
    use super::Time;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Time>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if s.trim().is_empty() {
            return Ok(None);
        }
        s.trim().parse().map(Some).map_err(serde::de::Error::custom)
    }
}

// ── Slots and days ──────────────────────────────────────────────────────────

/// A start/end pair. Either side may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default, with = "optional_time")]
    pub start: Option<Time>,
    #[serde(default, with = "optional_time")]
    pub end: Option<Time>,
}

impl TimeSlot {
    pub fn new(start: Time, end: Time) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when neither side is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The two slots a single day supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAvailability {
    #[serde(default)]
    pub slot1: TimeSlot,
    #[serde(default)]
    pub slot2: TimeSlot,
}

impl DailyAvailability {
    pub fn is_empty(&self) -> bool {
        self.slot1.is_empty() && self.slot2.is_empty()
    }
}

// ── Partial week ────────────────────────────────────────────────────────────

/// Sparse per-day availability: only mentioned days are present.
///
/// Absence is meaningful. A day that is missing here leaves the consumer's
/// existing value alone on [`WeeklyAvailability::merge`], whereas a present
/// day replaces it wholesale, even if its slots are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialWeeklyAvailability {
    days: BTreeMap<Weekday, DailyAvailability>,
}

impl PartialWeeklyAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday) -> Option<&DailyAvailability> {
        self.days.get(&day)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Present days in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DailyAvailability)> {
        self.days.iter().map(|(day, daily)| (*day, daily))
    }

    /// The day's entry, inserted empty on first access. Entries are never removed.
    pub(crate) fn entry(&mut self, day: Weekday) -> &mut DailyAvailability {
        self.days.entry(day).or_default()
    }
}

impl FromIterator<(Weekday, DailyAvailability)> for PartialWeeklyAvailability {
    fn from_iter<I: IntoIterator<Item = (Weekday, DailyAvailability)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

// ── Full week ───────────────────────────────────────────────────────────────

/// A complete seven-day availability grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    #[serde(default)]
    pub monday: DailyAvailability,
    #[serde(default)]
    pub tuesday: DailyAvailability,
    #[serde(default)]
    pub wednesday: DailyAvailability,
    #[serde(default)]
    pub thursday: DailyAvailability,
    #[serde(default)]
    pub friday: DailyAvailability,
    #[serde(default)]
    pub saturday: DailyAvailability,
    #[serde(default)]
    pub sunday: DailyAvailability,
}

impl WeeklyAvailability {
    pub fn day(&self, day: Weekday) -> &DailyAvailability {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DailyAvailability {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// All seven days in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DailyAvailability)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Shallow per-day overwrite: every day present in `partial` replaces this
    /// week's value for that day; absent days are left untouched.
    ///
    /// ```
    /// use schedule_extractor::{extract, Weekday, WeeklyAvailability};
    ///
    /// let mut week = WeeklyAvailability::default();
    /// week.merge(&extract("seg das 9h as 11h"));
    /// assert_eq!(week.monday.slot1.start.unwrap().to_string(), "09:00");
    /// assert!(week.day(Weekday::Tuesday).is_empty());
    /// ```
    pub fn merge(&mut self, partial: &PartialWeeklyAvailability) {
        for (day, daily) in partial.iter() {
            *self.day_mut(day) = *daily;
        }
    }

    /// Owned variant of [`merge`](Self::merge).
    pub fn merged(mut self, partial: &PartialWeeklyAvailability) -> Self {
        self.merge(partial);
        self
    }
}
