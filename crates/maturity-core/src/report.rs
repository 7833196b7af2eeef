use crate::answer::AnswerSet;
use crate::maturity::MaturityLevel;
use crate::scoring::DimensionScores;
use crate::types::{Category, PhasePriority, Severity, Timeframe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssessmentContext / AssessmentData
// ---------------------------------------------------------------------------

/// Organization background collected before the question walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub industry: String,
    pub size: String,
    pub region: String,
    #[serde(default)]
    pub current_challenges: Vec<String>,
}

/// Session-scoped input to the orchestrator. Built once per run and not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentData {
    pub organization_id: String,
    pub responses: AnswerSet,
    pub context: AssessmentContext,
}

// ---------------------------------------------------------------------------
// Tagged agent output
// ---------------------------------------------------------------------------

/// A recommendation with its horizon assigned by the producing agent, so the
/// orchestrator buckets by tag instead of guessing from prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub timeframe: Timeframe,
}

/// A risk with its severity assigned by the producing agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub text: String,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// Report pieces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: f64,
    pub human: f64,
    pub business: f64,
    pub ai_adoption: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Technical => self.technical,
            Category::Human => self.human,
            Category::Business => self.business,
            Category::AiAdoption => self.ai_adoption,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u8,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub dependencies: Vec<String>,
    pub outcomes: Vec<String>,
    pub investment: String,
    pub priority: PhasePriority,
}

/// Projected return at the one, three, and five year horizons, in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub year1: u64,
    pub year3: u64,
    pub year5: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBuckets {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskBuckets {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

// ---------------------------------------------------------------------------
// AssessmentResult
// ---------------------------------------------------------------------------

/// The final report. Built once per distinct (organization, answer set) and
/// replayed from the orchestrator's cache on identical input.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub organization_id: String,
    pub timestamp: DateTime<Utc>,
    pub overall_maturity_level: u8,
    pub maturity: &'static MaturityLevel,
    pub category_scores: CategoryScores,
    pub dimension_scores: DimensionScores,
    pub top_strengths: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub recommendations: RecommendationBuckets,
    pub roadmap: Vec<RoadmapPhase>,
    pub estimated_roi: RoiEstimate,
    pub risk_analysis: RiskBuckets,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    #[test]
    fn assessment_data_json_roundtrip() {
        let mut responses = AnswerSet::new();
        responses.insert("data_governance".to_string(), Answer::YesNo(true));
        let data = AssessmentData {
            organization_id: "org-acme".to_string(),
            responses,
            context: AssessmentContext {
                industry: "Manufacturing".to_string(),
                size: "Enterprise".to_string(),
                region: "EMEA".to_string(),
                current_challenges: vec!["costs".to_string()],
            },
        };
        let json = serde_json::to_string(&data).unwrap();
        let parsed: AssessmentData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn category_scores_accessor() {
        let scores = CategoryScores {
            technical: 0.1,
            human: 0.2,
            business: 0.3,
            ai_adoption: 0.4,
        };
        assert_eq!(scores.get(Category::Technical), 0.1);
        assert_eq!(scores.get(Category::AiAdoption), 0.4);
    }

    #[test]
    fn result_serializes_with_maturity_metadata() {
        let result = AssessmentResult {
            organization_id: "org-1".to_string(),
            timestamp: Utc::now(),
            overall_maturity_level: 3,
            maturity: crate::maturity::level(3).unwrap(),
            category_scores: CategoryScores::default(),
            dimension_scores: DimensionScores::new(),
            top_strengths: vec![],
            critical_gaps: vec![],
            recommendations: RecommendationBuckets::default(),
            roadmap: vec![],
            estimated_roi: RoiEstimate::default(),
            risk_analysis: RiskBuckets::default(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["maturity"]["name"], "AI Adopting");
        assert_eq!(json["overall_maturity_level"], 3);
    }
}
