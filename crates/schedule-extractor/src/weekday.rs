//! Calendar weekdays and the Portuguese day-name synonym table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A day of the week, ordered Monday first.
///
/// The ordering drives range expansion: "de segunda a quarta" covers every
/// day whose [`index`](Weekday::index) lies between the two endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::ALL.get(index).copied()
    }

    /// Resolve a lowercase Portuguese day token (full name or abbreviation).
    ///
    /// Accented and unaccented spellings are both accepted. Returns `None`
    /// for anything outside the table.
    ///
    /// ```
    /// use schedule_extractor::Weekday;
    ///
    /// assert_eq!(Weekday::from_token("terça"), Some(Weekday::Tuesday));
    /// assert_eq!(Weekday::from_token("sab"), Some(Weekday::Saturday));
    /// assert_eq!(Weekday::from_token("fulano"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Weekday> {
        match token {
            "segunda" | "seg" | "segunda-feira" => Some(Weekday::Monday),
            "terça" | "terca" | "ter" | "terça-feira" | "terca-feira" => Some(Weekday::Tuesday),
            "quarta" | "qua" | "quarta-feira" => Some(Weekday::Wednesday),
            "quinta" | "qui" | "quinta-feira" => Some(Weekday::Thursday),
            "sexta" | "sex" | "sexta-feira" => Some(Weekday::Friday),
            "sábado" | "sabado" | "sab" => Some(Weekday::Saturday),
            "domingo" | "dom" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Lowercase English name, as used for map keys in stored schedules.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Portuguese display label ("Segunda-feira", "Sábado", ...).
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Segunda-feira",
            Weekday::Tuesday => "Terça-feira",
            Weekday::Wednesday => "Quarta-feira",
            Weekday::Thursday => "Quinta-feira",
            Weekday::Friday => "Sexta-feira",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == lower)
            .ok_or_else(|| ScheduleError::InvalidWeekday(format!("'{}'", s.trim())))
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}
