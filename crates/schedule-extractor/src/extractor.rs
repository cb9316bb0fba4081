//! Text → partial weekly availability.
//!
//! [`extract`] lowercases and tokenizes the input once, then applies the
//! three [`Rule`]s in fixed order over the same token stream, writing into one
//! shared result:
//!
//! 1. **Range**: "de segunda a quarta das 20 as 23" sets `slot1` for every
//!    day in the inclusive span. Reversed spans are skipped.
//! 2. **Single day**: "domingo das 8 as 12" fills `slot1` if its start is
//!    unset, otherwise overwrites `slot2`.
//! 3. **Continuation**: "e das 18 as 23" overwrites `slot2` of the day
//!    mentioned last before it, anywhere in the text.
//!
//! Nothing here can fail. Unrecognized pieces are skipped (and logged at
//! `debug`), so the worst outcome is an empty result.

use tracing::debug;

use crate::availability::{PartialWeeklyAvailability, TimeSlot};
use crate::lexer::{tokenize, Token};
use crate::rules::{scan_tokens, Rule, RuleMatch};
use crate::weekday::Weekday;

/// Extract the days and time ranges mentioned in `text`.
///
/// Only days the text actually assigns a time to are present in the result.
///
/// ```
/// use schedule_extractor::{extract, Weekday};
///
/// let week = extract("domingo das 8 as 12 e das 18 as 23");
/// let sunday = week.get(Weekday::Sunday).unwrap();
/// assert_eq!(sunday.slot1.start.unwrap().to_string(), "08:00");
/// assert_eq!(sunday.slot2.end.unwrap().to_string(), "23:00");
///
/// assert!(extract("sexta livre").is_empty());
/// ```
pub fn extract(text: &str) -> PartialWeeklyAvailability {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);
    let mut result = PartialWeeklyAvailability::new();

    for rule in Rule::ORDER {
        for found in scan_tokens(rule, &tokens) {
            apply(&mut result, &tokens, found);
        }
    }

    result
}

fn apply(result: &mut PartialWeeklyAvailability, tokens: &[Token], found: RuleMatch) {
    match found {
        RuleMatch::Range { from, to, slot } => apply_range(result, &from, &to, slot),
        RuleMatch::SingleDay { day, slot } => apply_single_day(result, &day, slot),
        RuleMatch::Continuation { at, slot } => apply_continuation(result, tokens, at, slot),
    }
}

fn apply_range(result: &mut PartialWeeklyAvailability, from: &str, to: &str, slot: TimeSlot) {
    let (Some(first), Some(last)) = (Weekday::from_token(from), Weekday::from_token(to)) else {
        debug!(from, to, "skipping range with unknown day");
        return;
    };
    if first > last {
        debug!(%first, %last, "skipping reversed range");
        return;
    }
    for day in &Weekday::ALL[first.index()..=last.index()] {
        result.entry(*day).slot1 = slot;
    }
}

fn apply_single_day(result: &mut PartialWeeklyAvailability, token: &str, slot: TimeSlot) {
    let Some(day) = Weekday::from_token(token) else {
        debug!(token, "skipping unknown day");
        return;
    };
    let daily = result.entry(day);
    if daily.slot1.start.is_none() {
        daily.slot1 = slot;
    } else {
        daily.slot2 = slot;
    }
}

fn apply_continuation(
    result: &mut PartialWeeklyAvailability,
    tokens: &[Token],
    at: usize,
    slot: TimeSlot,
) {
    let Some(day) = last_day_before(tokens, at) else {
        debug!(at, "skipping continuation with no preceding day");
        return;
    };
    result.entry(day).slot2 = slot;
}

/// The most recently mentioned day among `tokens[..at]`.
fn last_day_before(tokens: &[Token], at: usize) -> Option<Weekday> {
    tokens[..at.min(tokens.len())]
        .iter()
        .rev()
        .find_map(|token| token.word().and_then(Weekday::from_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{DailyAvailability, Time};

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn day(result: &PartialWeeklyAvailability, day: Weekday) -> DailyAvailability {
        *result
            .get(day)
            .unwrap_or_else(|| panic!("{day} missing from {result:?}"))
    }

    // ── empty and unrecognized input ────────────────────────────────────

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("   \n  ").is_empty());
    }

    #[test]
    fn test_free_day_without_time_is_ignored() {
        assert!(extract("sexta livre").is_empty());
    }

    #[test]
    fn test_unknown_day_token() {
        assert!(extract("fulano das 9 as 10").is_empty());
    }

    #[test]
    fn test_text_without_phrases() {
        assert!(extract("Oi, tudo bem? Posso jogar qualquer dia.").is_empty());
    }

    // ── range phrases ───────────────────────────────────────────────────

    #[test]
    fn test_range_covers_every_day() {
        let result = extract("de segunda a quarta das 20 as 23");
        assert_eq!(result.len(), 3);
        for d in [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday] {
            assert_eq!(day(&result, d).slot1, slot("20:00", "23:00"));
        }
        assert!(day(&result, Weekday::Monday).slot2.is_empty());
        assert!(day(&result, Weekday::Tuesday).slot2.is_empty());
    }

    #[test]
    fn test_range_reversed_is_skipped() {
        let result = extract("de sexta a segunda das 20 as 23");
        // Only "segunda das 20 as 23" survives, via the single-day rule.
        assert_eq!(result.len(), 1);
        assert_eq!(day(&result, Weekday::Monday).slot1, slot("20:00", "23:00"));
        for d in [Weekday::Friday, Weekday::Saturday, Weekday::Sunday] {
            assert!(!result.contains(d), "{d}");
        }
    }

    #[test]
    fn test_range_single_day_span() {
        let result = extract("de terça a terça das 10 as 11");
        assert_eq!(result.len(), 1);
        assert_eq!(day(&result, Weekday::Tuesday).slot1, slot("10:00", "11:00"));
    }

    #[test]
    fn test_range_with_unknown_end_is_skipped() {
        let result = extract("de segunda a amanha das 20 as 23");
        assert!(result.is_empty());
    }

    #[test]
    fn test_range_accented_endpoints() {
        let result = extract("De Terça a Sábado das 19h às 22h");
        assert_eq!(result.len(), 5);
        assert_eq!(day(&result, Weekday::Thursday).slot1, slot("19:00", "22:00"));
    }

    #[test]
    fn test_later_range_overwrites_slot1() {
        let result = extract("de seg a qua das 8 as 10 e de ter a qui das 14 as 16");
        assert_eq!(day(&result, Weekday::Monday).slot1, slot("08:00", "10:00"));
        assert_eq!(day(&result, Weekday::Tuesday).slot1, slot("14:00", "16:00"));
        assert_eq!(day(&result, Weekday::Thursday).slot1, slot("14:00", "16:00"));
    }

    // Phase order quirk: the single-day rule also matches the end day of a
    // range phrase and, since slot1 is already taken, writes its slot2.
    #[test]
    fn test_range_end_day_rematched_by_single_day_rule() {
        let result = extract("de segunda a quinta das 20 as 23");
        for d in [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday] {
            assert!(day(&result, d).slot2.is_empty(), "{d}");
        }
        let thursday = day(&result, Weekday::Thursday);
        assert_eq!(thursday.slot1, slot("20:00", "23:00"));
        assert_eq!(thursday.slot2, slot("20:00", "23:00"));
    }

    // ── single-day phrases ──────────────────────────────────────────────

    #[test]
    fn test_abbreviation_and_h_suffix() {
        let result = extract("seg das 9h as 11h");
        assert_eq!(result.len(), 1);
        assert_eq!(day(&result, Weekday::Monday).slot1, slot("09:00", "11:00"));
    }

    #[test]
    fn test_and_list_is_not_expanded() {
        let result = extract("Segunda e Terça das 20h as 23h");
        assert!(!result.contains(Weekday::Monday));
        assert_eq!(result.len(), 1);
        assert_eq!(day(&result, Weekday::Tuesday).slot1, slot("20:00", "23:00"));
    }

    #[test]
    fn test_single_day_second_mention_uses_slot2() {
        let result = extract("sabado das 10 as 12, sabado das 15 as 18, sabado das 20 as 22");
        let saturday = day(&result, Weekday::Saturday);
        assert_eq!(saturday.slot1, slot("10:00", "12:00"));
        // A third range for the same day overwrites slot2.
        assert_eq!(saturday.slot2, slot("20:00", "22:00"));
    }

    #[test]
    fn test_single_day_after_range_goes_to_slot2() {
        let result = extract("de segunda a sexta das 8 as 12. quarta das 14 as 18");
        let wednesday = day(&result, Weekday::Wednesday);
        assert_eq!(wednesday.slot1, slot("08:00", "12:00"));
        assert_eq!(wednesday.slot2, slot("14:00", "18:00"));
    }

    #[test]
    fn test_minutes_preserved() {
        let result = extract("quinta das 19:30 às 21:45");
        assert_eq!(day(&result, Weekday::Thursday).slot1, slot("19:30", "21:45"));
    }

    #[test]
    fn test_feira_compound() {
        let result = extract("Sexta-feira das 18h as 23h");
        assert_eq!(day(&result, Weekday::Friday).slot1, slot("18:00", "23:00"));
    }

    #[test]
    fn test_times_are_not_validated() {
        let result = extract("domingo das 23 as 7");
        let sunday = day(&result, Weekday::Sunday);
        assert_eq!(sunday.slot1.start, Some(Time::on_the_hour(23)));
        assert_eq!(sunday.slot1.end, Some(Time::on_the_hour(7)));
    }

    // ── continuation phrases ────────────────────────────────────────────

    #[test]
    fn test_continuation_fills_slot2() {
        let result = extract("domingo das 8 as 12 e das 18 as 23");
        let sunday = day(&result, Weekday::Sunday);
        assert_eq!(sunday.slot1, slot("08:00", "12:00"));
        assert_eq!(sunday.slot2, slot("18:00", "23:00"));
    }

    #[test]
    fn test_continuation_without_day_is_skipped() {
        assert!(extract("e das 18 as 23").is_empty());
    }

    #[test]
    fn test_continuation_uses_last_mentioned_day() {
        let result = extract("segunda das 8 as 10, quarta livre e das 18 as 20");
        // Wednesday has no time of its own; the continuation still lands on it.
        assert_eq!(day(&result, Weekday::Monday).slot1, slot("08:00", "10:00"));
        assert!(day(&result, Weekday::Monday).slot2.is_empty());
        let wednesday = day(&result, Weekday::Wednesday);
        assert!(wednesday.slot1.is_empty());
        assert_eq!(wednesday.slot2, slot("18:00", "20:00"));
    }

    #[test]
    fn test_continuation_after_range_attaches_to_end_day() {
        let result = extract("de seg a qua das 8 as 12 e das 14 as 18");
        // "qua das 8 as 12" first lands in slot2, then the continuation overwrites it.
        assert_eq!(day(&result, Weekday::Wednesday).slot2, slot("14:00", "18:00"));
        assert!(day(&result, Weekday::Monday).slot2.is_empty());
    }

    #[test]
    fn test_continuation_overwrites_slot2() {
        let result = extract("sab das 8 as 10, sab das 12 as 14 e das 16 as 18");
        assert_eq!(day(&result, Weekday::Saturday).slot1, slot("08:00", "10:00"));
        assert_eq!(day(&result, Weekday::Saturday).slot2, slot("16:00", "18:00"));
    }

    // ── mixed ───────────────────────────────────────────────────────────

    #[test]
    fn test_full_sentence() {
        let result = extract(
            "De segunda a quarta das 20h às 23h, Sexta livre, \
             Domingo das 8 as 12 e das 18 as 23",
        );
        assert_eq!(result.len(), 4);
        assert!(!result.contains(Weekday::Friday));
        assert!(!result.contains(Weekday::Saturday));
        assert_eq!(day(&result, Weekday::Tuesday).slot1, slot("20:00", "23:00"));
        assert_eq!(day(&result, Weekday::Sunday).slot2, slot("18:00", "23:00"));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "de seg a sex das 9 as 18 e sabado das 10 as 14";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_last_day_before_bounds() {
        let tokens = tokenize("sexta e");
        assert_eq!(last_day_before(&tokens, 0), None);
        assert_eq!(last_day_before(&tokens, 1), Some(Weekday::Friday));
        assert_eq!(last_day_before(&tokens, 99), Some(Weekday::Friday));
    }
}
