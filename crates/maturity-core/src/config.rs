use crate::error::Result;
use crate::report::RoiEstimate;
use crate::types::PhasePriority;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Score cutoffs used by the engine. Two independent sets live here: the
/// orchestrator's synthesis thresholds (`strength`/`gap`, applied to
/// aggregated dimension scores) and the per-agent policy thresholds
/// (`agent_risk`/`agent_insight`, applied inside each analyzer). They are
/// deliberately not shared: an agent flags a risk below 0.5, while the
/// synthesized report only calls a gap "critical" below 0.3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_strength")]
    pub strength: f64,
    #[serde(default = "default_gap")]
    pub gap: f64,
    #[serde(default = "default_agent_risk")]
    pub agent_risk: f64,
    #[serde(default = "default_agent_insight")]
    pub agent_insight: f64,
}

fn default_strength() -> f64 {
    0.7
}

fn default_gap() -> f64 {
    0.3
}

fn default_agent_risk() -> f64 {
    0.5
}

fn default_agent_insight() -> f64 {
    0.7
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strength: default_strength(),
            gap: default_gap(),
            agent_risk: default_agent_risk(),
            agent_insight: default_agent_insight(),
        }
    }
}

// ---------------------------------------------------------------------------
// RoiModel
// ---------------------------------------------------------------------------

/// One ROI horizon: `level * factor * base` dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiHorizon {
    pub factor: f64,
    pub base: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiModel {
    #[serde(default = "default_roi_year1")]
    pub year1: RoiHorizon,
    #[serde(default = "default_roi_year3")]
    pub year3: RoiHorizon,
    #[serde(default = "default_roi_year5")]
    pub year5: RoiHorizon,
}

fn default_roi_year1() -> RoiHorizon {
    RoiHorizon {
        factor: 0.10,
        base: 1_000_000,
    }
}

fn default_roi_year3() -> RoiHorizon {
    RoiHorizon {
        factor: 0.15,
        base: 3_000_000,
    }
}

fn default_roi_year5() -> RoiHorizon {
    RoiHorizon {
        factor: 0.20,
        base: 5_000_000,
    }
}

impl Default for RoiModel {
    fn default() -> Self {
        Self {
            year1: default_roi_year1(),
            year3: default_roi_year3(),
            year5: default_roi_year5(),
        }
    }
}

impl RoiModel {
    pub fn estimate(&self, level: u8) -> RoiEstimate {
        let horizon = |h: &RoiHorizon| (f64::from(level) * h.factor * h.base as f64).round() as u64;
        RoiEstimate {
            year1: horizon(&self.year1),
            year3: horizon(&self.year3),
            year5: horizon(&self.year5),
        }
    }
}

// ---------------------------------------------------------------------------
// Roadmap template
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhaseTemplate {
    pub phase: u8,
    pub name: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub outcomes: Vec<String>,
    pub investment: String,
    pub priority: PhasePriority,
    /// When set, the phase is emitted only for overall levels strictly below
    /// this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_below_level: Option<u8>,
}

fn default_roadmap() -> Vec<RoadmapPhaseTemplate> {
    vec![
        RoadmapPhaseTemplate {
            phase: 1,
            name: "AI Foundation".to_string(),
            description: "Establish basic AI readiness and governance".to_string(),
            duration: "3 months".to_string(),
            dependencies: vec![],
            outcomes: vec![
                "AI strategy defined".to_string(),
                "Leadership alignment".to_string(),
                "Initial skills assessment".to_string(),
            ],
            investment: "$50K-$200K".to_string(),
            priority: PhasePriority::Critical,
            only_below_level: Some(3),
        },
        RoadmapPhaseTemplate {
            phase: 2,
            name: "AI Pilot Projects".to_string(),
            description: "Launch targeted AI pilots in high-impact areas".to_string(),
            duration: "6 months".to_string(),
            dependencies: vec!["AI Foundation".to_string()],
            outcomes: vec![
                "3-5 AI pilots launched".to_string(),
                "ROI validated".to_string(),
                "Team upskilled".to_string(),
            ],
            investment: "$200K-$500K".to_string(),
            priority: PhasePriority::High,
            only_below_level: None,
        },
        RoadmapPhaseTemplate {
            phase: 3,
            name: "AI Scaling".to_string(),
            description: "Scale successful pilots across the organization".to_string(),
            duration: "9 months".to_string(),
            dependencies: vec!["AI Pilot Projects".to_string()],
            outcomes: vec![
                "Enterprise AI platform".to_string(),
                "10+ use cases in production".to_string(),
                "Culture transformation".to_string(),
            ],
            investment: "$500K-$2M".to_string(),
            priority: PhasePriority::High,
            only_below_level: None,
        },
        RoadmapPhaseTemplate {
            phase: 4,
            name: "AI Transformation".to_string(),
            description: "Achieve AI-driven business transformation".to_string(),
            duration: "18 months".to_string(),
            dependencies: vec!["AI Scaling".to_string()],
            outcomes: vec![
                "AI-first operations".to_string(),
                "New business models".to_string(),
                "Industry leadership".to_string(),
            ],
            investment: "$2M-$10M".to_string(),
            priority: PhasePriority::Medium,
            only_below_level: None,
        },
    ]
}

// ---------------------------------------------------------------------------
// AssessmentConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub roi: RoiModel,
    #[serde(default = "default_roadmap")]
    pub roadmap: Vec<RoadmapPhaseTemplate>,
    /// Capacity of the orchestrator's LRU result cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_cache_capacity() -> usize {
    128
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            roi: RoiModel::default(),
            roadmap: default_roadmap(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl AssessmentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: AssessmentConfig = serde_yaml::from_str(&data)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roi_matches_model_constants() {
        let roi = RoiModel::default().estimate(5);
        assert_eq!(roi.year1, 500_000);
        assert_eq!(roi.year3, 2_250_000);
        assert_eq!(roi.year5, 5_000_000);
    }

    #[test]
    fn roi_at_level_zero_is_zero() {
        let roi = RoiModel::default().estimate(0);
        assert_eq!(roi.year1, 0);
        assert_eq!(roi.year3, 0);
        assert_eq!(roi.year5, 0);
    }

    #[test]
    fn default_roadmap_has_four_phases_with_foundation_gated() {
        let phases = default_roadmap();
        assert_eq!(phases.len(), 4);
        assert_eq!(phases[0].only_below_level, Some(3));
        assert!(phases[1..].iter().all(|p| p.only_below_level.is_none()));
    }

    #[test]
    fn config_yaml_roundtrip() {
        let config = AssessmentConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: AssessmentConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.thresholds.strength, 0.7);
        assert_eq!(parsed.thresholds.gap, 0.3);
        assert_eq!(parsed.roadmap.len(), 4);
        assert_eq!(parsed.cache_capacity, 128);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let parsed: AssessmentConfig =
            serde_yaml::from_str("thresholds:\n  strength: 0.8\n").unwrap();
        assert_eq!(parsed.thresholds.strength, 0.8);
        assert_eq!(parsed.thresholds.gap, 0.3);
        assert_eq!(parsed.roi.year1.base, 1_000_000);
        assert_eq!(parsed.roadmap.len(), 4);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("assessment.yaml");
        std::fs::write(&path, "cache_capacity: 4\n").unwrap();
        let config = AssessmentConfig::load(&path).unwrap();
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.thresholds.strength, 0.7);
    }
}
