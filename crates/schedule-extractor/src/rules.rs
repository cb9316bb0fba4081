//! The three phrase rules, as pure token-stream matchers.
//!
//! Matchers report day tokens as written and leave synonym resolution (and
//! the decision to skip) to the extractor. The one exception is the single-day
//! rule, which only fires on a known day word; otherwise the "e" of
//! "e das 18 as 23" would read as a day. Each rule scans the whole token
//! stream for non-overlapping matches, left to right.
//!
//! Grammar, over lowercased tokens:
//!
//! ```text
//! range        := "de" WORD "a" WORD "das" time_range
//! single_day   := DAY "das" time_range
//! continuation := "e" "das" time_range
//! time_range   := time SEP time
//! time         := HOUR [ ":" MM ] [ "h" ]      (suffixes glued to HOUR)
//! SEP          := "às" | "as" | "a"
//! ```

use crate::availability::{Time, TimeSlot};
use crate::lexer::{tokenize, Token};
use crate::weekday::Weekday;

/// The phrase rules, in the order the extractor applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// "de segunda a quarta das 20 as 23"
    Range,
    /// "domingo das 8 as 12"
    SingleDay,
    /// "e das 18 as 23" (no day of its own)
    Continuation,
}

impl Rule {
    /// Fixed application order. Later rules may overwrite earlier writes.
    pub const ORDER: [Rule; 3] = [Rule::Range, Rule::SingleDay, Rule::Continuation];

    fn match_at(self, tokens: &[Token], i: usize) -> Option<(RuleMatch, usize)> {
        match self {
            Rule::Range => match_range(tokens, i),
            Rule::SingleDay => match_single_day(tokens, i),
            Rule::Continuation => match_continuation(tokens, i),
        }
    }
}

/// One match of a [`Rule`]. Day fields hold the raw lowercased token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    Range {
        from: String,
        to: String,
        slot: TimeSlot,
    },
    SingleDay {
        day: String,
        slot: TimeSlot,
    },
    Continuation {
        /// Token index of the "e" connective.
        at: usize,
        slot: TimeSlot,
    },
}

/// Lowercase and tokenize `text`, then collect every match of `rule`.
///
/// ```
/// use schedule_extractor::rules::{scan, Rule, RuleMatch};
///
/// let matches = scan(Rule::SingleDay, "Domingo das 8 as 12 e das 18 as 23");
/// assert_eq!(matches.len(), 1);
/// assert!(matches!(&matches[0], RuleMatch::SingleDay { day, .. } if day == "domingo"));
/// ```
pub fn scan(rule: Rule, text: &str) -> Vec<RuleMatch> {
    scan_tokens(rule, &tokenize(&text.to_lowercase()))
}

pub(crate) fn scan_tokens(rule: Rule, tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match rule.match_at(tokens, i) {
            Some((found, next)) => {
                matches.push(found);
                i = next;
            }
            None => i += 1,
        }
    }
    matches
}

// ── Matchers ────────────────────────────────────────────────────────────────

fn match_range(tokens: &[Token], i: usize) -> Option<(RuleMatch, usize)> {
    if !tokens.get(i)?.is_word("de") {
        return None;
    }
    let from = tokens.get(i + 1)?.word()?;
    if !tokens.get(i + 2)?.is_word("a") {
        return None;
    }
    let to = tokens.get(i + 3)?.word()?;
    if !tokens.get(i + 4)?.is_word("das") {
        return None;
    }
    let (slot, next) = time_range(tokens, i + 5)?;
    Some((
        RuleMatch::Range {
            from: from.to_string(),
            to: to.to_string(),
            slot,
        },
        next,
    ))
}

fn match_single_day(tokens: &[Token], i: usize) -> Option<(RuleMatch, usize)> {
    let day = tokens.get(i)?.word()?;
    Weekday::from_token(day)?;
    if !tokens.get(i + 1)?.is_word("das") {
        return None;
    }
    let (slot, next) = time_range(tokens, i + 2)?;
    Some((
        RuleMatch::SingleDay {
            day: day.to_string(),
            slot,
        },
        next,
    ))
}

fn match_continuation(tokens: &[Token], i: usize) -> Option<(RuleMatch, usize)> {
    if !tokens.get(i)?.is_word("e") || !tokens.get(i + 1)?.is_word("das") {
        return None;
    }
    let (slot, next) = time_range(tokens, i + 2)?;
    Some((RuleMatch::Continuation { at: i, slot }, next))
}

// ── Time grammar ────────────────────────────────────────────────────────────

/// `time SEP time` starting at `i`. Returns the slot and the index after it.
fn time_range(tokens: &[Token], i: usize) -> Option<(TimeSlot, usize)> {
    let (start, i) = time(tokens, i)?;
    let sep = tokens.get(i)?.word()?;
    if !matches!(sep, "às" | "as" | "a") {
        return None;
    }
    let (end, i) = time(tokens, i + 1)?;
    Some((TimeSlot::new(start, end), i))
}

/// One time: a 1–2 digit hour, then an optional glued `:MM` and/or `h`.
fn time(tokens: &[Token], i: usize) -> Option<(Time, usize)> {
    let hour_token = tokens.get(i)?;
    let hour = parse_digits(hour_token.number()?, 1..=2)?;
    let mut last = hour_token;
    let mut next = i + 1;
    let mut minute = 0;

    if let (Some(colon), Some(mm)) = (tokens.get(next), tokens.get(next + 1)) {
        if colon.is_colon() && colon.follows(last) && mm.follows(colon) {
            if let Some(m) = mm.number().and_then(|n| parse_digits(n, 2..=2)) {
                minute = m;
                last = mm;
                next += 2;
            }
        }
    }

    if let Some(suffix) = tokens.get(next) {
        if suffix.is_word("h") && suffix.follows(last) {
            next += 1;
        }
    }

    Some((Time::new(hour, minute), next))
}

fn parse_digits(digits: &str, len: std::ops::RangeInclusive<usize>) -> Option<u8> {
    if !len.contains(&digits.len()) {
        return None;
    }
    digits.parse().ok()
}
