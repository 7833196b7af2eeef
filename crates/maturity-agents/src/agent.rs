use async_trait::async_trait;
use maturity_core::report::{AssessmentData, Recommendation, Risk};
use maturity_core::scoring::DimensionScores;
use maturity_core::Result;
use serde::Serialize;

// ---------------------------------------------------------------------------
// AgentAnalysis
// ---------------------------------------------------------------------------

/// The output of one analyzer run: normalized scores for its owned
/// dimensions plus tagged qualitative findings. Built once per orchestration
/// and consumed immediately by aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct AgentAnalysis {
    pub agent_id: String,
    pub dimension_scores: DimensionScores,
    pub insights: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub risks: Vec<Risk>,
    /// Analytic reliability in [0,1]; the orchestrator weights this agent's
    /// scores by it when several agents report the same dimension.
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// AssessmentAgent
// ---------------------------------------------------------------------------

/// An analyzer responsible for scoring a fixed subset of dimensions.
///
/// The trait is the swap point for future analyzers (an external scoring
/// service, an ML model): the orchestrator only sees this interface.
#[async_trait]
pub trait AssessmentAgent: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Dimension ids this agent assesses. Disjoint across a roster.
    fn dimensions(&self) -> &[&'static str];

    async fn analyze(&self, data: &AssessmentData) -> Result<AgentAnalysis>;
}
