use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Answer
// ---------------------------------------------------------------------------

/// A recorded answer to one question. The variant is expected to match the
/// question's kind; a mismatched or out-of-range value is treated as
/// "not answered" by the scoring functions rather than raising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// 0-10 self-rating.
    Scale(u8),
    YesNo(bool),
    /// One of the question's option strings.
    Choice(String),
    Text(String),
}

/// Answers keyed by question id. An ordered map, so serializing the set is
/// independent of insertion order and the orchestrator's cache key is stable
/// across logically-identical answer sets.
pub type AnswerSet = BTreeMap<String, Answer>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_json_roundtrip() {
        let answers = [
            Answer::Scale(7),
            Answer::YesNo(true),
            Answer::Choice("Cloud-first".to_string()),
            Answer::Text("we run quarterly reviews".to_string()),
        ];
        for a in answers {
            let json = serde_json::to_string(&a).unwrap();
            let parsed: Answer = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, a);
        }
    }

    #[test]
    fn answer_set_serialization_ignores_insertion_order() {
        let mut forward = AnswerSet::new();
        forward.insert("a".to_string(), Answer::Scale(1));
        forward.insert("b".to_string(), Answer::YesNo(false));

        let mut reverse = AnswerSet::new();
        reverse.insert("b".to_string(), Answer::YesNo(false));
        reverse.insert("a".to_string(), Answer::Scale(1));

        assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            serde_json::to_string(&reverse).unwrap()
        );
    }
}
