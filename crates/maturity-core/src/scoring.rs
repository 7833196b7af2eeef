//! Pure scoring functions: answers -> dimension scores -> category scores ->
//! overall maturity level. Deterministic and side-effect-free; everything
//! else in the engine is built on these.

use crate::answer::{Answer, AnswerSet};
use crate::catalog;
use crate::dimension::{Dimension, Question};
use crate::types::{Category, QuestionKind};
use std::collections::BTreeMap;

/// Aggregated per-dimension scores, keyed by dimension id. Ordered map so
/// serialized output is stable.
pub type DimensionScores = BTreeMap<String, f64>;

// ---------------------------------------------------------------------------
// Per-question scoring
// ---------------------------------------------------------------------------

/// Score a single answered question into [0,1], or `None` when the answer is
/// unscorable: free text, a value that does not match the question's kind, or
/// an out-of-range scale value. Unscorable answers are excluded from both
/// numerator and denominator, never zero-filled.
fn question_score(question: &Question, answer: &Answer) -> Option<f64> {
    match (question.kind, answer) {
        (QuestionKind::Scale, Answer::Scale(v)) if *v <= 10 => Some(f64::from(*v) / 10.0),
        (QuestionKind::YesNo, Answer::YesNo(b)) => Some(if *b { 1.0 } else { 0.0 }),
        (QuestionKind::MultipleChoice, Answer::Choice(choice)) => {
            // Higher option index = higher maturity; an unrecognized choice
            // scores as index 0.
            let span = question.options.len().saturating_sub(1);
            if span == 0 {
                return Some(0.0);
            }
            let index = question
                .options
                .iter()
                .position(|opt| opt.eq_ignore_ascii_case(choice))
                .unwrap_or(0);
            Some(index as f64 / span as f64)
        }
        (QuestionKind::Text, _) => None,
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Dimension / category / overall
// ---------------------------------------------------------------------------

/// Weighted average of the dimension's answered, scorable questions.
/// Returns 0.0 when nothing scorable was answered.
pub fn score_dimension(dimension: &Dimension, answers: &AnswerSet) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for question in dimension.questions {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };
        if let Some(score) = question_score(question, answer) {
            total += score * question.weight;
            weight_sum += question.weight;
        }
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// Weighted average of the category's dimension scores, over dimensions
/// present in the map. Returns 0.0 when none are present.
pub fn score_category(category: Category, scores: &DimensionScores) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for dimension in catalog::by_category(category) {
        if let Some(score) = scores.get(dimension.id) {
            total += score * dimension.weight;
            weight_sum += dimension.weight;
        }
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// Overall maturity level: weighted average over all catalog dimensions,
/// scaled to 0-10 and floored. An all-maximum profile floors to 10, so the
/// result is clamped to the model's top level of 9.
pub fn score_overall(scores: &DimensionScores) -> u8 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for dimension in catalog::catalog() {
        if let Some(score) = scores.get(dimension.id) {
            total += score * dimension.weight;
            weight_sum += dimension.weight;
        }
    }

    let normalized = if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    };
    ((normalized * 10.0).floor() as u8).min(9)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, dimension};

    fn answers(pairs: &[(&str, Answer)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, a)| (id.to_string(), a.clone()))
            .collect()
    }

    #[test]
    fn empty_answers_score_zero() {
        for dim in catalog() {
            assert_eq!(score_dimension(dim, &AnswerSet::new()), 0.0);
        }
    }

    #[test]
    fn scale_answer_divides_by_ten() {
        let dim = dimension("data_quality").unwrap();
        let set = answers(&[("data_quality_score", Answer::Scale(8))]);
        let score = score_dimension(dim, &set);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn yes_no_scores_one_or_zero() {
        let dim = dimension("data_quality").unwrap();
        let yes = answers(&[("data_governance", Answer::YesNo(true))]);
        let no = answers(&[("data_governance", Answer::YesNo(false))]);
        assert_eq!(score_dimension(dim, &yes), 1.0);
        assert_eq!(score_dimension(dim, &no), 0.0);
    }

    #[test]
    fn choice_scores_by_option_index() {
        let dim = dimension("tech_infrastructure").unwrap();
        // "Cloud-native" is index 4 of 5 options -> 4/4 = 1.0
        let top = answers(&[("cloud_adoption", Answer::Choice("Cloud-native".into()))]);
        assert_eq!(score_dimension(dim, &top), 1.0);
        // "Hybrid cloud" is index 1 -> 0.25
        let mid = answers(&[("cloud_adoption", Answer::Choice("Hybrid cloud".into()))]);
        assert!((score_dimension(dim, &mid) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_choice_scores_as_index_zero() {
        let dim = dimension("tech_infrastructure").unwrap();
        let set = answers(&[("cloud_adoption", Answer::Choice("Mainframe".into()))]);
        assert_eq!(score_dimension(dim, &set), 0.0);
    }

    #[test]
    fn out_of_range_scale_is_excluded_not_errored() {
        let dim = dimension("data_quality").unwrap();
        // Scale(11) is malformed -> treated as unanswered; only the yes/no counts.
        let set = answers(&[
            ("data_quality_score", Answer::Scale(11)),
            ("data_governance", Answer::YesNo(true)),
        ]);
        assert_eq!(score_dimension(dim, &set), 1.0);
    }

    #[test]
    fn mismatched_answer_kind_is_excluded() {
        let dim = dimension("data_quality").unwrap();
        let set = answers(&[("data_governance", Answer::Scale(9))]);
        assert_eq!(score_dimension(dim, &set), 0.0);
    }

    #[test]
    fn unanswered_questions_do_not_dilute() {
        // Only one of two questions answered: the score is that question's
        // score, not halved.
        let dim = dimension("skills_talent").unwrap();
        let set = answers(&[("training_program", Answer::YesNo(true))]);
        assert_eq!(score_dimension(dim, &set), 1.0);
    }

    #[test]
    fn dimension_scores_stay_in_unit_interval() {
        for dim in catalog() {
            let mut set = AnswerSet::new();
            for q in dim.questions {
                let a = match q.kind {
                    QuestionKind::Scale => Answer::Scale(10),
                    QuestionKind::YesNo => Answer::YesNo(true),
                    QuestionKind::MultipleChoice => {
                        Answer::Choice(q.options.last().unwrap().to_string())
                    }
                    QuestionKind::Text => Answer::Text("n/a".into()),
                };
                set.insert(q.id.to_string(), a);
            }
            let score = score_dimension(dim, &set);
            assert!((0.0..=1.0).contains(&score), "{}: {}", dim.id, score);
        }
    }

    #[test]
    fn category_score_ignores_absent_dimensions() {
        let mut scores = DimensionScores::new();
        scores.insert("tech_infrastructure".into(), 0.6);
        // Only one technical dimension present: weighted average is its score.
        assert!((score_category(Category::Technical, &scores) - 0.6).abs() < 1e-9);
        assert_eq!(score_category(Category::Human, &scores), 0.0);
    }

    #[test]
    fn overall_is_floored() {
        let mut scores = DimensionScores::new();
        for dim in catalog() {
            scores.insert(dim.id.to_string(), 0.55);
        }
        assert_eq!(score_overall(&scores), 5);
    }

    #[test]
    fn overall_all_maximum_clamps_to_nine() {
        let mut scores = DimensionScores::new();
        for dim in catalog() {
            scores.insert(dim.id.to_string(), 1.0);
        }
        assert_eq!(score_overall(&scores), 9);
    }

    #[test]
    fn overall_empty_is_zero() {
        assert_eq!(score_overall(&DimensionScores::new()), 0);
    }

    #[test]
    fn overall_is_deterministic() {
        let mut scores = DimensionScores::new();
        for dim in catalog() {
            scores.insert(dim.id.to_string(), 0.42);
        }
        assert_eq!(score_overall(&scores), score_overall(&scores));
    }
}
