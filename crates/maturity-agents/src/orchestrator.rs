//! Fan-out/fan-in over the agent roster. Stateless per call apart from the
//! bounded result cache: identical (organization, answer set) input replays
//! the cached report without re-running any agent.

use crate::agent::{AgentAnalysis, AssessmentAgent};
use crate::analyzers::default_roster;
use chrono::Utc;
use futures::future::join_all;
use lru::LruCache;
use maturity_core::config::AssessmentConfig;
use maturity_core::report::{
    AssessmentData, AssessmentResult, CategoryScores, RecommendationBuckets, RiskBuckets,
    RoadmapPhase,
};
use maturity_core::scoring::{score_category, score_overall, DimensionScores};
use maturity_core::types::{Category, Severity, Timeframe};
use maturity_core::{catalog, maturity, AssessmentError, Result};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Caller-constructed orchestrator (no global instance), so tests and
/// embedders can supply their own roster and configuration.
pub struct Orchestrator {
    agents: Vec<Arc<dyn AssessmentAgent>>,
    config: AssessmentConfig,
    cache: Mutex<LruCache<String, Arc<AssessmentResult>>>,
}

impl Orchestrator {
    /// Standard four-agent roster with the given configuration.
    pub fn new(config: AssessmentConfig) -> Self {
        let agents = default_roster(&config.thresholds);
        Self::with_agents(agents, config)
    }

    pub fn with_agents(agents: Vec<Arc<dyn AssessmentAgent>>, config: AssessmentConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity.max(1)).unwrap();
        Self {
            agents,
            config,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn register_agent(&mut self, agent: Arc<dyn AssessmentAgent>) {
        self.agents.push(agent);
    }

    // -----------------------------------------------------------------------
    // Orchestration
    // -----------------------------------------------------------------------

    pub async fn orchestrate(&self, data: &AssessmentData) -> Result<Arc<AssessmentResult>> {
        let key = cache_key(data)?;
        if let Some(hit) = self.cache.lock().await.get(&key) {
            tracing::debug!(organization = %data.organization_id, "assessment cache hit");
            return Ok(Arc::clone(hit));
        }

        // Gather: run every agent concurrently; a failing agent contributes
        // nothing but never aborts the run.
        let outcomes = join_all(self.agents.iter().map(|agent| {
            let agent = Arc::clone(agent);
            async move {
                match agent.analyze(data).await {
                    Ok(analysis) => Some(analysis),
                    Err(err) => {
                        tracing::warn!(
                            agent = agent.id(),
                            error = %err,
                            "agent failed; excluded from aggregation"
                        );
                        None
                    }
                }
            }
        }))
        .await;
        let analyses: Vec<AgentAnalysis> = outcomes.into_iter().flatten().collect();

        if analyses.is_empty() {
            return Err(AssessmentError::AssessmentUnavailable);
        }

        let dimension_scores = aggregate_scores(&analyses);
        let overall = score_overall(&dimension_scores);
        let maturity = maturity::level(overall).ok_or(AssessmentError::UnknownLevel(overall))?;

        let category_scores = CategoryScores {
            technical: score_category(Category::Technical, &dimension_scores),
            human: score_category(Category::Human, &dimension_scores),
            business: score_category(Category::Business, &dimension_scores),
            ai_adoption: score_category(Category::AiAdoption, &dimension_scores),
        };

        let (top_strengths, critical_gaps) = self.synthesize_insights(&dimension_scores);

        let result = Arc::new(AssessmentResult {
            organization_id: data.organization_id.clone(),
            timestamp: Utc::now(),
            overall_maturity_level: overall,
            maturity,
            category_scores,
            dimension_scores,
            top_strengths,
            critical_gaps,
            recommendations: bucket_recommendations(&analyses),
            roadmap: self.generate_roadmap(overall),
            estimated_roi: self.config.roi.estimate(overall),
            risk_analysis: bucket_risks(&analyses),
        });

        self.cache.lock().await.put(key, Arc::clone(&result));
        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Synthesis
    // -----------------------------------------------------------------------

    /// Strengths and gaps from aggregated scores. These cutoffs are the
    /// synthesis thresholds (default 0.7/0.3), distinct from the per-agent
    /// policy thresholds (0.7/0.5) applied inside each analyzer.
    fn synthesize_insights(&self, scores: &DimensionScores) -> (Vec<String>, Vec<String>) {
        let mut strengths = Vec::new();
        let mut gaps = Vec::new();
        for (id, score) in scores {
            let name = catalog::dimension(id).map_or_else(|| id.clone(), |d| d.name.to_string());
            if *score > self.config.thresholds.strength {
                strengths.push(format!("Strong {name} capabilities"));
            } else if *score < self.config.thresholds.gap {
                gaps.push(format!("Critical gap in {name}"));
            }
        }
        (strengths, gaps)
    }

    /// The fixed phase template; the foundation phase only applies below the
    /// configured maturity cutoff.
    fn generate_roadmap(&self, overall: u8) -> Vec<RoadmapPhase> {
        self.config
            .roadmap
            .iter()
            .filter(|t| t.only_below_level.is_none_or(|cutoff| overall < cutoff))
            .map(|t| RoadmapPhase {
                phase: t.phase,
                name: t.name.clone(),
                description: t.description.clone(),
                duration: t.duration.clone(),
                dependencies: t.dependencies.clone(),
                outcomes: t.outcomes.clone(),
                investment: t.investment.clone(),
                priority: t.priority,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Confidence-weighted average per dimension over the agents that reported
/// it. A dimension reported by no agent (or only by agents with zero
/// confidence) is absent from the result, never defaulted to 0.
fn aggregate_scores(analyses: &[AgentAnalysis]) -> DimensionScores {
    let mut totals: std::collections::BTreeMap<String, (f64, f64)> = Default::default();
    for analysis in analyses {
        for (dimension, score) in &analysis.dimension_scores {
            let entry = totals.entry(dimension.clone()).or_insert((0.0, 0.0));
            entry.0 += score * analysis.confidence;
            entry.1 += analysis.confidence;
        }
    }
    totals
        .into_iter()
        .filter(|(_, (_, weight))| *weight > 0.0)
        .map(|(dimension, (total, weight))| (dimension, total / weight))
        .collect()
}

fn bucket_recommendations(analyses: &[AgentAnalysis]) -> RecommendationBuckets {
    let mut buckets = RecommendationBuckets::default();
    for rec in analyses.iter().flat_map(|a| &a.recommendations) {
        let bucket = match rec.timeframe {
            Timeframe::Immediate => &mut buckets.immediate,
            Timeframe::ShortTerm => &mut buckets.short_term,
            Timeframe::LongTerm => &mut buckets.long_term,
        };
        bucket.push(rec.text.clone());
    }
    buckets
}

fn bucket_risks(analyses: &[AgentAnalysis]) -> RiskBuckets {
    let mut buckets = RiskBuckets::default();
    for risk in analyses.iter().flat_map(|a| &a.risks) {
        let bucket = match risk.severity {
            Severity::High => &mut buckets.high,
            Severity::Medium => &mut buckets.medium,
            Severity::Low => &mut buckets.low,
        };
        bucket.push(risk.text.clone());
    }
    buckets
}

/// Organization id plus the ordered serialization of the answer set. The
/// answer map is a BTreeMap, so two logically-identical sets always produce
/// the same key regardless of insertion order.
fn cache_key(data: &AssessmentData) -> Result<String> {
    let answers = serde_json::to_string(&data.responses)?;
    Ok(format!("{}:{answers}", data.organization_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
