use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The four groupings of assessment dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Human,
    Business,
    AiAdoption,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Technical,
            Category::Human,
            Category::Business,
            Category::AiAdoption,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Human => "human",
            Category::Business => "business",
            Category::AiAdoption => "ai_adoption",
        }
    }

    /// Display name used in prompts and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Technical => "Technical Readiness",
            Category::Human => "Human & Organizational Readiness",
            Category::Business => "Business Alignment",
            Category::AiAdoption => "AI Adoption",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(Category::Technical),
            "human" => Ok(Category::Human),
            "business" => Ok(Category::Business),
            "ai_adoption" | "ai-adoption" => Ok(Category::AiAdoption),
            _ => Err(crate::error::AssessmentError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// QuestionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Numeric self-rating on a 0-10 scale.
    Scale,
    YesNo,
    /// Single select from an ordered option list (higher index = higher maturity).
    MultipleChoice,
    /// Free text; captured but never scored.
    Text,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::Scale => "scale",
            QuestionKind::YesNo => "yes_no",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::Text => "text",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Timeframe
// ---------------------------------------------------------------------------

/// Recommendation horizon, assigned by the producing agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    LongTerm,
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Risk severity, assigned by the producing agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

// ---------------------------------------------------------------------------
// PhasePriority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhasePriority {
    Critical,
    High,
    Medium,
    Low,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_roundtrip() {
        for cat in Category::all() {
            let parsed = Category::from_str(cat.as_str()).unwrap();
            assert_eq!(*cat, parsed);
        }
    }

    #[test]
    fn category_rejects_unknown() {
        assert!(Category::from_str("financial").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn category_serde_matches_as_str() {
        for cat in Category::all() {
            let json = serde_json::to_string(cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }

    #[test]
    fn timeframe_serde_roundtrip() {
        for &tf in &[Timeframe::Immediate, Timeframe::ShortTerm, Timeframe::LongTerm] {
            let json = serde_json::to_string(&tf).unwrap();
            let parsed: Timeframe = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, tf);
        }
    }

    #[test]
    fn severity_serde_roundtrip() {
        for &sev in &[Severity::High, Severity::Medium, Severity::Low] {
            let json = serde_json::to_string(&sev).unwrap();
            let parsed: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, sev);
        }
    }
}
