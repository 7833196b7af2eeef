use crate::types::{Category, QuestionKind};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    /// Globally unique across all dimensions.
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    /// Ordered low-to-high maturity; empty unless `MultipleChoice`.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
    /// Relative importance within the owning dimension.
    pub weight: f64,
    /// Declared-but-dormant: no scoring or flow code reads this yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<&'static FollowUp>,
}

/// A conditional follow-up question. Carried through from the assessment
/// framework definition; nothing consumes it yet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowUp {
    pub condition: &'static str,
    pub question: &'static Question,
}

// ---------------------------------------------------------------------------
// MaturityIndicator
// ---------------------------------------------------------------------------

/// Label-only markers describing what a dimension looks like at a given level.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaturityIndicator {
    pub level: u8,
    pub indicators: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One scored facet of organizational AI readiness. Immutable; the full set
/// lives in [`crate::catalog`] and never changes at runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dimension {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Relative importance in category and overall scores. Weights are not
    /// required to sum to 1.
    pub weight: f64,
    pub questions: &'static [Question],
    /// Metric labels only; no values are collected for these.
    pub metrics: &'static [&'static str],
    pub maturity_indicators: &'static [MaturityIndicator],
}

impl Dimension {
    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
