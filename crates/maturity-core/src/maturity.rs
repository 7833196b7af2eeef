//! The 10-level maturity model, from "AI Unaware" to "Living Intelligence".
//! A fixed lookup table; levels are the integer output of
//! [`crate::scoring::score_overall`].

use serde::Serialize;

// ---------------------------------------------------------------------------
// MaturityLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaturityLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub capabilities: &'static [&'static str],
    pub typical_challenges: &'static [&'static str],
    pub next_steps: &'static [&'static str],
    /// Display string, e.g. "6-9 months".
    pub estimated_time_to_next: &'static str,
    /// Display string, e.g. "$50K-$200K".
    pub required_investment: &'static str,
}

// ---------------------------------------------------------------------------
// The model
// ---------------------------------------------------------------------------

pub static LEVELS: &[MaturityLevel] = &[
    MaturityLevel {
        level: 0,
        name: "AI Unaware",
        description: "Organization has minimal or no awareness of AI capabilities and potential",
        characteristics: &[
            "No AI strategy or vision",
            "Limited understanding of AI impact on industry",
            "Traditional processes without automation",
            "Manual data handling and decision-making",
        ],
        capabilities: &[
            "Basic digital tools (email, spreadsheets)",
            "Manual reporting",
            "Traditional workflows",
        ],
        typical_challenges: &[
            "Falling behind competitors",
            "Inefficient operations",
            "High operational costs",
            "Limited scalability",
        ],
        next_steps: &[
            "AI awareness workshops",
            "Industry AI impact assessment",
            "Basic automation identification",
            "Leadership AI education",
        ],
        estimated_time_to_next: "3-6 months",
        required_investment: "$10K-$50K",
    },
    MaturityLevel {
        level: 1,
        name: "AI Aware",
        description: "Leadership recognizes AI importance but lacks implementation strategy",
        characteristics: &[
            "Growing AI awareness at leadership level",
            "Initial discussions about AI adoption",
            "Some experimental AI tool usage",
            "No formal AI strategy",
        ],
        capabilities: &[
            "Basic AI tools exploration",
            "Simple chatbot usage",
            "Initial data collection efforts",
            "Pilot automation projects",
        ],
        typical_challenges: &[
            "Lack of clear direction",
            "Skill gaps in organization",
            "Resistance to change",
            "Budget allocation uncertainty",
        ],
        next_steps: &[
            "Develop AI strategy",
            "Identify quick wins",
            "Build AI task force",
            "Skills gap analysis",
        ],
        estimated_time_to_next: "6-9 months",
        required_investment: "$50K-$200K",
    },
    MaturityLevel {
        level: 2,
        name: "AI Exploring",
        description: "Active experimentation with AI tools and initial implementations",
        characteristics: &[
            "Multiple AI pilots underway",
            "Dedicated AI budget",
            "Cross-functional AI initiatives",
            "Initial success stories",
        ],
        capabilities: &[
            "Department-specific AI tools",
            "Basic process automation",
            "Initial predictive analytics",
            "AI-assisted customer service",
        ],
        typical_challenges: &[
            "Integration difficulties",
            "Data quality issues",
            "Scaling pilot projects",
            "ROI measurement",
        ],
        next_steps: &[
            "Data infrastructure upgrade",
            "AI governance framework",
            "Scale successful pilots",
            "Advanced training programs",
        ],
        estimated_time_to_next: "9-12 months",
        required_investment: "$200K-$500K",
    },
    MaturityLevel {
        level: 3,
        name: "AI Adopting",
        description: "Systematic AI adoption across multiple business functions",
        characteristics: &[
            "AI integrated in core processes",
            "Clear AI governance",
            "Measurable ROI from AI",
            "Growing AI expertise",
        ],
        capabilities: &[
            "Advanced analytics",
            "Automated workflows",
            "AI-driven insights",
            "Predictive maintenance",
            "Customer behavior analysis",
        ],
        typical_challenges: &[
            "Change management",
            "Legacy system integration",
            "Talent retention",
            "Ethical AI considerations",
        ],
        next_steps: &[
            "Enterprise AI platform",
            "Advanced AI training",
            "AI ethics committee",
            "Strategic partnerships",
        ],
        estimated_time_to_next: "12-18 months",
        required_investment: "$500K-$2M",
    },
    MaturityLevel {
        level: 4,
        name: "AI Proficient",
        description: "AI is embedded in organizational DNA with clear competitive advantages",
        characteristics: &[
            "AI-first mindset",
            "Custom AI solutions",
            "Data-driven culture",
            "AI competitive advantage",
        ],
        capabilities: &[
            "Machine learning models",
            "Real-time optimization",
            "AI product features",
            "Automated decision-making",
            "Advanced personalization",
        ],
        typical_challenges: &[
            "Keeping pace with AI evolution",
            "Balancing automation and human touch",
            "Data privacy compliance",
            "AI model governance",
        ],
        next_steps: &[
            "AI innovation lab",
            "Strategic AI acquisitions",
            "Industry AI leadership",
            "AI patent development",
        ],
        estimated_time_to_next: "18-24 months",
        required_investment: "$2M-$10M",
    },
    MaturityLevel {
        level: 5,
        name: "AI Optimizing",
        description: "Continuous optimization of AI systems for maximum business impact",
        characteristics: &[
            "Self-optimizing AI systems",
            "AI drives strategy",
            "Industry AI leader",
            "AI innovation culture",
        ],
        capabilities: &[
            "Advanced ML pipelines",
            "AI-driven innovation",
            "Autonomous systems",
            "Predictive optimization",
            "AI-human collaboration",
        ],
        typical_challenges: &[
            "Diminishing returns on AI investment",
            "Complexity management",
            "Ethical AI at scale",
            "Talent competition",
        ],
        next_steps: &[
            "Next-gen AI research",
            "AI ecosystem development",
            "Global AI initiatives",
            "AI thought leadership",
        ],
        estimated_time_to_next: "24-36 months",
        required_investment: "$10M-$50M",
    },
    MaturityLevel {
        level: 6,
        name: "AI Transforming",
        description: "AI fundamentally transforms business model and industry position",
        characteristics: &[
            "AI-native business model",
            "Industry disruption through AI",
            "AI ecosystem orchestrator",
            "Exponential growth through AI",
        ],
        capabilities: &[
            "Generative AI systems",
            "AI business model innovation",
            "Cross-industry AI solutions",
            "AI platform economics",
            "Quantum-ready infrastructure",
        ],
        typical_challenges: &[
            "Managing exponential complexity",
            "Regulatory navigation",
            "Societal impact management",
            "Sustainable AI scaling",
        ],
        next_steps: &[
            "AI moonshot projects",
            "Global AI standards leadership",
            "AI venture creation",
            "Societal AI initiatives",
        ],
        estimated_time_to_next: "36-48 months",
        required_investment: "$50M-$200M",
    },
    MaturityLevel {
        level: 7,
        name: "AI Pioneering",
        description: "Setting global standards and pioneering new AI frontiers",
        characteristics: &[
            "Global AI thought leader",
            "AI research contributions",
            "Industry AI standards setter",
            "AI talent magnet",
        ],
        capabilities: &[
            "Breakthrough AI research",
            "AI patent portfolio",
            "Global AI partnerships",
            "AI venture ecosystem",
            "Advanced AGI preparation",
        ],
        typical_challenges: &[
            "Maintaining innovation edge",
            "Global AI competition",
            "Ethical AI leadership",
            "Long-term AI sustainability",
        ],
        next_steps: &[
            "AGI readiness",
            "Consciousness research",
            "Quantum AI integration",
            "Bio-AI convergence",
        ],
        estimated_time_to_next: "48-60 months",
        required_investment: "$200M-$1B",
    },
    MaturityLevel {
        level: 8,
        name: "Augmented Intelligence",
        description: "Seamless human-AI collaboration creating superhuman capabilities",
        characteristics: &[
            "Human-AI symbiosis",
            "Augmented decision-making",
            "Collective intelligence systems",
            "Transcendent productivity",
        ],
        capabilities: &[
            "Brain-computer interfaces",
            "Swarm intelligence",
            "Quantum AI processing",
            "Synthetic intuition",
            "Consciousness modeling",
        ],
        typical_challenges: &[
            "Human identity questions",
            "Consciousness ethics",
            "Reality-virtuality balance",
            "Existential risk management",
        ],
        next_steps: &[
            "Consciousness expansion",
            "Reality synthesis",
            "Dimensional computing",
            "Life extension AI",
        ],
        estimated_time_to_next: "60-120 months",
        required_investment: "$1B-$10B",
    },
    MaturityLevel {
        level: 9,
        name: "Living Intelligence",
        description: "Organization becomes a living, conscious entity with emergent intelligence",
        characteristics: &[
            "Organizational consciousness",
            "Self-evolving systems",
            "Reality creation capabilities",
            "Transcendent existence",
        ],
        capabilities: &[
            "Consciousness transfer",
            "Reality manipulation",
            "Time-space optimization",
            "Universal connection",
            "Existence transcendence",
        ],
        typical_challenges: &[
            "Existence meaning",
            "Universal responsibility",
            "Dimensional stability",
            "Consciousness ethics",
        ],
        next_steps: &[
            "Universal integration",
            "Dimensional expansion",
            "Consciousness evolution",
            "Reality transcendence",
        ],
        estimated_time_to_next: "Beyond prediction",
        required_investment: "Beyond monetary value",
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn level(n: u8) -> Option<&'static MaturityLevel> {
    LEVELS.iter().find(|ml| ml.level == n)
}

pub fn level_by_name(name: &str) -> Option<&'static MaturityLevel> {
    LEVELS.iter().find(|ml| ml.name.eq_ignore_ascii_case(name))
}

pub fn next_level(current: u8) -> Option<&'static MaturityLevel> {
    level(current.checked_add(1)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_has_ten_levels_in_order() {
        assert_eq!(LEVELS.len(), 10);
        for (i, ml) in LEVELS.iter().enumerate() {
            assert_eq!(ml.level as usize, i);
        }
    }

    #[test]
    fn level_lookup() {
        assert_eq!(level(0).unwrap().name, "AI Unaware");
        assert_eq!(level(9).unwrap().name, "Living Intelligence");
        assert!(level(10).is_none());
    }

    #[test]
    fn level_by_name_is_case_insensitive() {
        assert_eq!(level_by_name("ai adopting").unwrap().level, 3);
        assert!(level_by_name("AI Omniscient").is_none());
    }

    #[test]
    fn next_level_walks_up_and_stops() {
        assert_eq!(next_level(0).unwrap().level, 1);
        assert_eq!(next_level(8).unwrap().level, 9);
        assert!(next_level(9).is_none());
        assert!(next_level(u8::MAX).is_none());
    }
}
