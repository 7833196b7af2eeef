//! Free-text answer parsing shared by every input channel (text chat, voice
//! transcript callbacks). These rules exist in exactly one place so the
//! channels cannot drift apart.

use crate::answer::Answer;
use crate::dimension::Question;
use crate::types::QuestionKind;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Scale (0-10)
// ---------------------------------------------------------------------------

/// Verbal descriptions accepted for scale answers. Ordered so that longer
/// phrases are tried before any phrase they contain ("very good" before
/// "good", "none" before "one").
const WORD_SCORES: &[(&str, u8)] = &[
    ("zero", 0),
    ("none", 0),
    ("nothing", 0),
    ("very little", 1),
    ("minimal", 1),
    ("one", 1),
    ("little", 2),
    ("two", 2),
    ("three", 3),
    ("some", 3),
    ("a bit", 3),
    ("four", 4),
    ("moderate", 4),
    ("five", 5),
    ("halfway", 5),
    ("half", 5),
    ("middle", 5),
    ("six", 6),
    ("above average", 6),
    ("seven", 7),
    ("very good", 8),
    ("good", 7),
    ("well", 7),
    ("eight", 8),
    ("strong", 8),
    ("nine", 9),
    ("excellent", 9),
    ("almost complete", 9),
    ("ten", 10),
    ("perfect", 10),
    ("fully", 10),
    ("complete", 10),
];

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"\b(\d+)\b").unwrap())
}

/// Extract a 0-10 rating from free text. A literal number wins (clamped to
/// 10, so "15" parses as 10), then the verbal table; an unrecognized phrase
/// falls back to the midpoint 5.
pub fn parse_scale(input: &str) -> u8 {
    if let Some(m) = number_re().find(input) {
        // A parse failure here means the digits overflow u32; any such value
        // clamps to the top of the scale anyway.
        return m.as_str().parse::<u32>().map_or(10, |n| n.min(10) as u8);
    }

    let lower = input.to_lowercase();
    for (word, value) in WORD_SCORES {
        if lower.contains(word) {
            return *value;
        }
    }

    5
}

// ---------------------------------------------------------------------------
// Yes / no
// ---------------------------------------------------------------------------

/// Outcome of parsing a yes/no utterance. `Unclear` is surfaced explicitly so
/// the caller can re-prompt instead of silently coercing to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNoReply {
    Yes,
    No,
    Unclear,
}

const YES_INDICATORS: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "absolutely",
    "definitely",
    "certainly",
    "of course",
    "we do",
    "we have",
    "correct",
    "that's right",
    "affirmative",
];

const NO_INDICATORS: &[&str] = &[
    "no",
    "nope",
    "not really",
    "not yet",
    "we don't",
    "we haven't",
    "negative",
    "not at all",
];

pub fn parse_yes_no(input: &str) -> YesNoReply {
    let lower = input.to_lowercase();

    if YES_INDICATORS.iter().any(|word| lower.contains(word)) {
        return YesNoReply::Yes;
    }
    if NO_INDICATORS.iter().any(|word| lower.contains(word)) {
        return YesNoReply::No;
    }
    YesNoReply::Unclear
}

// ---------------------------------------------------------------------------
// Multiple choice
// ---------------------------------------------------------------------------

/// Match an utterance against a question's option list: whole-option
/// substring match first, then any word of an option. Returns `None` when
/// nothing matches.
pub fn parse_choice<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let lower = input.to_lowercase();

    for option in options {
        if lower.contains(&option.to_lowercase()) {
            return Some(option);
        }
    }
    for option in options {
        if option
            .to_lowercase()
            .split_whitespace()
            .any(|word| lower.contains(word))
        {
            return Some(option);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Per-question dispatch
// ---------------------------------------------------------------------------

/// Parse an utterance into an [`Answer`] for the given question. Returns
/// `None` only for an unclear yes/no reply, which callers should answer with
/// a clarifying re-prompt. An unmatched multiple-choice utterance is stored
/// verbatim and scores as the lowest option downstream.
pub fn parse_answer(input: &str, question: &Question) -> Option<Answer> {
    match question.kind {
        QuestionKind::Scale => Some(Answer::Scale(parse_scale(input))),
        QuestionKind::YesNo => match parse_yes_no(input) {
            YesNoReply::Yes => Some(Answer::YesNo(true)),
            YesNoReply::No => Some(Answer::YesNo(false)),
            YesNoReply::Unclear => None,
        },
        QuestionKind::MultipleChoice => {
            let matched = parse_choice(input, question.options)
                .map(str::to_string)
                .unwrap_or_else(|| input.trim().to_string());
            Some(Answer::Choice(matched))
        }
        QuestionKind::Text => Some(Answer::Text(input.trim().to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn scale_parses_direct_integers() {
        assert_eq!(parse_scale("8"), 8);
        assert_eq!(parse_scale("I'd say 3 out of 10"), 3);
        assert_eq!(parse_scale("0"), 0);
    }

    #[test]
    fn scale_clamps_out_of_range_integers() {
        assert_eq!(parse_scale("15"), 10);
        assert_eq!(parse_scale("about 100 percent"), 10);
    }

    #[test]
    fn scale_parses_verbal_descriptions() {
        assert_eq!(parse_scale("pretty good"), 7);
        assert_eq!(parse_scale("excellent"), 9);
        assert_eq!(parse_scale("very good actually"), 8);
        assert_eq!(parse_scale("we have very little in place"), 1);
        assert_eq!(parse_scale("it's almost complete"), 9);
        assert_eq!(parse_scale("NONE"), 0);
    }

    #[test]
    fn scale_defaults_to_midpoint() {
        assert_eq!(parse_scale("hard to say"), 5);
        assert_eq!(parse_scale(""), 5);
    }

    #[test]
    fn yes_no_indicator_lists() {
        assert_eq!(parse_yes_no("absolutely"), YesNoReply::Yes);
        assert_eq!(parse_yes_no("yes, we do"), YesNoReply::Yes);
        assert_eq!(parse_yes_no("that's right"), YesNoReply::Yes);
        assert_eq!(parse_yes_no("not really"), YesNoReply::No);
        assert_eq!(parse_yes_no("Nope"), YesNoReply::No);
    }

    #[test]
    fn yes_no_surfaces_unclear() {
        assert_eq!(parse_yes_no("somewhat"), YesNoReply::Unclear);
        assert_eq!(parse_yes_no("it depends on the team"), YesNoReply::Unclear);
    }

    #[test]
    fn choice_whole_option_match_wins() {
        let options = ["No cloud", "Hybrid cloud", "Cloud-first"];
        assert_eq!(
            parse_choice("we're hybrid cloud today", &options),
            Some("Hybrid cloud")
        );
    }

    #[test]
    fn choice_falls_back_to_word_match() {
        let options = ["None", "ISO 27001", "SOC 2", "NIST", "Multiple frameworks"];
        assert_eq!(parse_choice("we follow NIST mostly", &options), Some("NIST"));
        assert_eq!(
            parse_choice("several frameworks at once", &options),
            Some("Multiple frameworks")
        );
    }

    #[test]
    fn choice_unmatched_is_none() {
        let options = ["None", "ISO 27001"];
        assert_eq!(parse_choice("we use tarot cards", &options), None);
    }

    #[test]
    fn parse_answer_dispatches_by_kind() {
        let (_, scale_q) = catalog::question("data_architecture").unwrap();
        assert_eq!(parse_answer("pretty good", scale_q), Some(Answer::Scale(7)));

        let (_, yn_q) = catalog::question("api_integration").unwrap();
        assert_eq!(parse_answer("we do", yn_q), Some(Answer::YesNo(true)));
        assert_eq!(parse_answer("maybe", yn_q), None);

        let (_, mc_q) = catalog::question("cloud_adoption").unwrap();
        assert_eq!(
            parse_answer("cloud-native all the way", mc_q),
            Some(Answer::Choice("Cloud-native".to_string()))
        );
    }
}
