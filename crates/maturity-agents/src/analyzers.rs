//! The four concrete analyzers. Each derives its dimension scores directly
//! from the answer map via the core scoring functions and applies the
//! threshold policy to produce tagged findings. Narrative phrasing is a
//! fn-pointer table per analyzer, so the findings read in each analyst's
//! voice without four near-identical `analyze` implementations.

use crate::agent::{AgentAnalysis, AssessmentAgent};
use async_trait::async_trait;
use maturity_core::catalog;
use maturity_core::config::Thresholds;
use maturity_core::report::{AssessmentData, Recommendation, Risk};
use maturity_core::scoring::{score_dimension, DimensionScores};
use maturity_core::types::{Category, Severity, Timeframe};
use maturity_core::Result;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// AnalyzerVoice
// ---------------------------------------------------------------------------

/// Phrase templates for one analyzer, keyed off the dimension display name.
struct AnalyzerVoice {
    risk: fn(&str) -> String,
    recommendation: fn(&str) -> String,
    insight: fn(&str) -> String,
    opportunity: fn(&str) -> String,
}

// ---------------------------------------------------------------------------
// ScoringAnalyzer
// ---------------------------------------------------------------------------

/// Answer-driven analyzer over one category of the catalog.
pub struct ScoringAnalyzer {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    dimension_ids: Vec<&'static str>,
    confidence: f64,
    thresholds: Thresholds,
    voice: AnalyzerVoice,
}

impl ScoringAnalyzer {
    fn for_category(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        confidence: f64,
        thresholds: Thresholds,
        voice: AnalyzerVoice,
    ) -> Self {
        Self {
            id,
            name,
            description,
            dimension_ids: catalog::by_category(category).map(|d| d.id).collect(),
            confidence,
            thresholds,
            voice,
        }
    }

    pub fn technical(thresholds: Thresholds) -> Self {
        Self::for_category(
            "technical_infrastructure_agent",
            "Technical Infrastructure Analyst",
            "Analyzes technical readiness and infrastructure maturity",
            Category::Technical,
            0.85,
            thresholds,
            AnalyzerVoice {
                risk: |d| format!("Low {d} maturity poses operational risk"),
                recommendation: |d| format!("Invest in {d} improvements"),
                insight: |d| format!("Strong {d} provides competitive advantage"),
                opportunity: |d| format!("Leverage {d} for AI initiatives"),
            },
        )
    }

    pub fn human_capital(thresholds: Thresholds) -> Self {
        Self::for_category(
            "human_capital_agent",
            "Human Capital Analyst",
            "Evaluates organizational culture and human readiness",
            Category::Human,
            0.80,
            thresholds,
            AnalyzerVoice {
                risk: |d| format!("{d} gaps may hinder AI adoption"),
                recommendation: |d| format!("Develop {d} capabilities"),
                insight: |d| format!("{d} strength enables transformation"),
                opportunity: |d| format!("Build on {d} for change leadership"),
            },
        )
    }

    pub fn business_strategy(thresholds: Thresholds) -> Self {
        Self::for_category(
            "business_strategy_agent",
            "Business Strategy Analyst",
            "Assesses business alignment and strategic readiness",
            Category::Business,
            0.82,
            thresholds,
            AnalyzerVoice {
                risk: |d| format!("Weak {d} limits AI value realization"),
                recommendation: |d| format!("Strengthen {d} foundation"),
                insight: |d| format!("{d} excellence drives AI success"),
                opportunity: |d| format!("Use {d} for competitive advantage"),
            },
        )
    }

    pub fn ai_adoption(thresholds: Thresholds) -> Self {
        Self::for_category(
            "ai_adoption_agent",
            "AI Adoption Specialist",
            "Evaluates current AI adoption and future potential",
            Category::AiAdoption,
            0.88,
            thresholds,
            AnalyzerVoice {
                risk: |d| format!("Low {d} maturity delays AI benefits"),
                recommendation: |d| format!("Accelerate {d} development"),
                insight: |d| format!("Advanced {d} enables AI leadership"),
                opportunity: |d| format!("Expand {d} for innovation"),
            },
        )
    }

    /// Severity grades by how far the score falls below the risk threshold.
    fn severity_for(&self, score: f64) -> Severity {
        let deficit = self.thresholds.agent_risk - score;
        if deficit >= 0.3 {
            Severity::High
        } else if deficit >= 0.15 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Urgency grades by depth: below the critical-gap line the fix is
    /// immediate, otherwise near-term.
    fn timeframe_for(&self, score: f64) -> Timeframe {
        if score < self.thresholds.gap {
            Timeframe::Immediate
        } else {
            Timeframe::ShortTerm
        }
    }
}

#[async_trait]
impl AssessmentAgent for ScoringAnalyzer {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn dimensions(&self) -> &[&'static str] {
        &self.dimension_ids
    }

    async fn analyze(&self, data: &AssessmentData) -> Result<AgentAnalysis> {
        let mut scores = DimensionScores::new();
        let mut insights = Vec::new();
        let mut opportunities = Vec::new();
        let mut recommendations = Vec::new();
        let mut risks = Vec::new();

        for id in &self.dimension_ids {
            let dimension = catalog::dimension(id)
                .ok_or_else(|| maturity_core::AssessmentError::UnknownDimension(id.to_string()))?;
            let score = score_dimension(dimension, &data.responses);
            scores.insert(dimension.id.to_string(), score);

            if score < self.thresholds.agent_risk {
                risks.push(Risk {
                    text: (self.voice.risk)(dimension.name),
                    severity: self.severity_for(score),
                });
                recommendations.push(Recommendation {
                    text: (self.voice.recommendation)(dimension.name),
                    timeframe: self.timeframe_for(score),
                });
            } else if score > self.thresholds.agent_insight {
                insights.push((self.voice.insight)(dimension.name));
                opportunities.push((self.voice.opportunity)(dimension.name));
                // A strength is also a long-horizon play worth naming.
                recommendations.push(Recommendation {
                    text: (self.voice.opportunity)(dimension.name),
                    timeframe: Timeframe::LongTerm,
                });
            }
        }

        Ok(AgentAnalysis {
            agent_id: self.id.to_string(),
            dimension_scores: scores,
            insights,
            opportunities,
            recommendations,
            risks,
            confidence: self.confidence,
        })
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// The standard four-agent roster covering the full catalog.
pub fn default_roster(thresholds: &Thresholds) -> Vec<Arc<dyn AssessmentAgent>> {
    vec![
        Arc::new(ScoringAnalyzer::technical(thresholds.clone())),
        Arc::new(ScoringAnalyzer::human_capital(thresholds.clone())),
        Arc::new(ScoringAnalyzer::business_strategy(thresholds.clone())),
        Arc::new(ScoringAnalyzer::ai_adoption(thresholds.clone())),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_core::answer::{Answer, AnswerSet};
    use maturity_core::report::AssessmentContext;
    use maturity_core::types::QuestionKind;
    use std::collections::HashSet;

    fn data_with(responses: AnswerSet) -> AssessmentData {
        AssessmentData {
            organization_id: "org-test".to_string(),
            responses,
            context: AssessmentContext::default(),
        }
    }

    fn answers_for_category(category: Category, high: bool) -> AnswerSet {
        let mut set = AnswerSet::new();
        for dim in catalog::by_category(category) {
            for q in dim.questions {
                let a = match q.kind {
                    QuestionKind::Scale => Answer::Scale(if high { 10 } else { 0 }),
                    QuestionKind::YesNo => Answer::YesNo(high),
                    QuestionKind::MultipleChoice => Answer::Choice(
                        if high {
                            q.options[q.options.len() - 1]
                        } else {
                            q.options[0]
                        }
                        .to_string(),
                    ),
                    QuestionKind::Text => Answer::Text("n/a".to_string()),
                };
                set.insert(q.id.to_string(), a);
            }
        }
        set
    }

    #[test]
    fn roster_partitions_the_catalog() {
        let roster = default_roster(&Thresholds::default());
        assert_eq!(roster.len(), 4);

        let counts: Vec<usize> = roster.iter().map(|a| a.dimensions().len()).collect();
        assert_eq!(counts, vec![5, 5, 7, 6]);

        let mut seen = HashSet::new();
        for agent in &roster {
            for id in agent.dimensions() {
                assert!(seen.insert(*id), "dimension {id} owned twice");
            }
        }
        assert_eq!(seen.len(), catalog::catalog().len());
    }

    #[tokio::test]
    async fn strong_answers_yield_insights_and_long_term_plays() {
        let agent = ScoringAnalyzer::technical(Thresholds::default());
        let data = data_with(answers_for_category(Category::Technical, true));
        let analysis = agent.analyze(&data).await.unwrap();

        assert_eq!(analysis.agent_id, "technical_infrastructure_agent");
        assert_eq!(analysis.confidence, 0.85);
        assert_eq!(analysis.dimension_scores.len(), 5);
        assert!(analysis.dimension_scores.values().all(|s| *s == 1.0));
        assert_eq!(analysis.insights.len(), 5);
        assert_eq!(analysis.opportunities.len(), 5);
        assert!(analysis.risks.is_empty());
        assert!(analysis
            .recommendations
            .iter()
            .all(|r| r.timeframe == Timeframe::LongTerm));
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("Data Quality & Governance")));
    }

    #[tokio::test]
    async fn weak_answers_yield_high_severity_immediate_findings() {
        let agent = ScoringAnalyzer::human_capital(Thresholds::default());
        let data = data_with(answers_for_category(Category::Human, false));
        let analysis = agent.analyze(&data).await.unwrap();

        assert_eq!(analysis.confidence, 0.80);
        assert!(analysis.dimension_scores.values().all(|s| *s == 0.0));
        assert_eq!(analysis.risks.len(), 5);
        assert!(analysis.risks.iter().all(|r| r.severity == Severity::High));
        assert!(analysis
            .recommendations
            .iter()
            .all(|r| r.timeframe == Timeframe::Immediate));
        assert!(analysis.insights.is_empty());
    }

    #[tokio::test]
    async fn unanswered_dimensions_score_zero_and_flag_risk() {
        let agent = ScoringAnalyzer::business_strategy(Thresholds::default());
        let data = data_with(AnswerSet::new());
        let analysis = agent.analyze(&data).await.unwrap();

        assert_eq!(analysis.dimension_scores.len(), 7);
        assert!(analysis.dimension_scores.values().all(|s| *s == 0.0));
        assert_eq!(analysis.risks.len(), 7);
    }

    #[tokio::test]
    async fn analysis_is_deterministic() {
        let agent = ScoringAnalyzer::ai_adoption(Thresholds::default());
        let data = data_with(answers_for_category(Category::AiAdoption, true));
        let first = agent.analyze(&data).await.unwrap();
        let second = agent.analyze(&data).await.unwrap();
        assert_eq!(first.dimension_scores, second.dimension_scores);
        assert_eq!(first.insights, second.insights);
    }

    #[test]
    fn severity_grading_bands() {
        let agent = ScoringAnalyzer::technical(Thresholds::default());
        assert_eq!(agent.severity_for(0.1), Severity::High);
        assert_eq!(agent.severity_for(0.3), Severity::Medium);
        assert_eq!(agent.severity_for(0.45), Severity::Low);
    }
}
