//! The assessment framework: 23 dimensions across 4 categories, defined at
//! compile time and never mutated.

use crate::dimension::{Dimension, MaturityIndicator, Question};
use crate::types::{Category, QuestionKind};

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

const fn scale(id: &'static str, text: &'static str, weight: f64) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Scale,
        options: &[],
        weight,
        follow_up: None,
    }
}

const fn yes_no(id: &'static str, text: &'static str, weight: f64) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::YesNo,
        options: &[],
        weight,
        follow_up: None,
    }
}

const fn choice(
    id: &'static str,
    text: &'static str,
    options: &'static [&'static str],
    weight: f64,
) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::MultipleChoice,
        options,
        weight,
        follow_up: None,
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub static CATALOG: &[Dimension] = &[
    // Technical
    Dimension {
        id: "tech_infrastructure",
        name: "Technical Infrastructure",
        category: Category::Technical,
        description: "Evaluation of current IT infrastructure and its readiness for AI",
        weight: 0.8,
        questions: &[
            choice(
                "cloud_adoption",
                "What is your current cloud adoption level?",
                &["No cloud", "Hybrid cloud", "Cloud-first", "Multi-cloud", "Cloud-native"],
                0.3,
            ),
            scale(
                "data_architecture",
                "How would you rate your data architecture maturity?",
                0.4,
            ),
            yes_no("api_integration", "Do you have API-first architecture?", 0.3),
        ],
        metrics: &["System uptime", "API response time", "Data processing capacity"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["On-premise only", "Siloed systems", "Manual processes"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Cloud-native", "Microservices", "Real-time processing"],
            },
        ],
    },
    Dimension {
        id: "data_quality",
        name: "Data Quality & Governance",
        category: Category::Technical,
        description: "Assessment of data quality, governance, and management practices",
        weight: 0.9,
        questions: &[
            yes_no(
                "data_governance",
                "Do you have a formal data governance framework?",
                0.4,
            ),
            scale(
                "data_quality_score",
                "Rate your organization's data quality (1-10)",
                0.6,
            ),
        ],
        metrics: &["Data accuracy rate", "Data completeness", "Governance compliance"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No data governance", "Poor data quality", "Data silos"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Automated governance",
                    "Real-time quality monitoring",
                    "Golden records",
                ],
            },
        ],
    },
    Dimension {
        id: "security_compliance",
        name: "Security & Compliance",
        category: Category::Technical,
        description: "Cybersecurity posture and regulatory compliance readiness",
        weight: 0.9,
        questions: &[
            choice(
                "security_framework",
                "Which security frameworks do you follow?",
                &["None", "ISO 27001", "SOC 2", "NIST", "Multiple frameworks"],
                0.5,
            ),
            yes_no("ai_ethics", "Do you have AI ethics guidelines?", 0.5),
        ],
        metrics: &["Security incidents", "Compliance score", "Audit findings"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Basic security", "No compliance framework", "Reactive approach"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Zero-trust architecture",
                    "Proactive compliance",
                    "AI ethics board",
                ],
            },
        ],
    },
    Dimension {
        id: "integration_capability",
        name: "Integration & Interoperability",
        category: Category::Technical,
        description: "Ability to integrate systems and ensure interoperability",
        weight: 0.7,
        questions: &[
            yes_no(
                "integration_platform",
                "Do you have an enterprise integration platform?",
                0.5,
            ),
            scale(
                "api_maturity",
                "What percentage of your systems expose APIs?",
                0.5,
            ),
        ],
        metrics: &["Integration success rate", "API availability", "System connectivity"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &[
                    "Point-to-point integrations",
                    "Manual data transfer",
                    "Isolated systems",
                ],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Event-driven architecture", "API gateway", "Real-time sync"],
            },
        ],
    },
    Dimension {
        id: "scalability",
        name: "Scalability & Performance",
        category: Category::Technical,
        description: "System scalability and performance optimization capabilities",
        weight: 0.7,
        questions: &[
            yes_no("auto_scaling", "Do your systems support auto-scaling?", 0.5),
            scale(
                "performance_monitoring",
                "How comprehensive is your performance monitoring?",
                0.5,
            ),
        ],
        metrics: &["Response time", "Throughput", "Resource utilization"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Manual scaling", "Basic monitoring", "Performance issues"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Auto-scaling", "Predictive optimization", "Edge computing"],
            },
        ],
    },
    // Human
    Dimension {
        id: "leadership_vision",
        name: "Leadership & Vision",
        category: Category::Human,
        description: "Leadership commitment and vision for AI transformation",
        weight: 0.9,
        questions: &[
            scale(
                "ceo_commitment",
                "How committed is your CEO to AI transformation?",
                0.6,
            ),
            yes_no("ai_strategy", "Do you have a formal AI strategy?", 0.4),
        ],
        metrics: &["Leadership engagement score", "Strategy execution", "Vision clarity"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No AI vision", "Limited leadership buy-in", "Tactical thinking"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["AI-first leadership", "Clear vision", "Strategic execution"],
            },
        ],
    },
    Dimension {
        id: "culture_change",
        name: "Culture & Change Readiness",
        category: Category::Human,
        description: "Organizational culture and readiness for change",
        weight: 0.8,
        questions: &[
            scale(
                "innovation_culture",
                "How would you describe your innovation culture?",
                0.5,
            ),
            scale(
                "change_history",
                "How successful have past transformation initiatives been?",
                0.5,
            ),
        ],
        metrics: &["Employee engagement", "Innovation index", "Change success rate"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Resistance to change", "Risk-averse culture", "Siloed thinking"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Innovation culture", "Embrace change", "Collaborative mindset"],
            },
        ],
    },
    Dimension {
        id: "skills_talent",
        name: "Skills & Talent",
        category: Category::Human,
        description: "AI and digital skills availability and development",
        weight: 0.9,
        questions: &[
            scale(
                "ai_skills",
                "What percentage of your workforce has AI/ML skills?",
                0.5,
            ),
            yes_no("training_program", "Do you have an AI training program?", 0.5),
        ],
        metrics: &["Skills gap analysis", "Training completion", "Talent retention"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Major skills gap", "No training program", "Talent shortage"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["AI-literate workforce", "Continuous learning", "Talent magnet"],
            },
        ],
    },
    Dimension {
        id: "collaboration",
        name: "Collaboration & Communication",
        category: Category::Human,
        description: "Cross-functional collaboration and communication effectiveness",
        weight: 0.7,
        questions: &[
            scale(
                "cross_functional",
                "How effective is cross-functional collaboration?",
                0.5,
            ),
            yes_no(
                "communication_tools",
                "Do you use modern collaboration tools?",
                0.5,
            ),
        ],
        metrics: &[
            "Collaboration score",
            "Communication effectiveness",
            "Team productivity",
        ],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Siloed departments", "Email-only communication", "Limited sharing"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Seamless collaboration",
                    "Real-time communication",
                    "Knowledge sharing",
                ],
            },
        ],
    },
    Dimension {
        id: "employee_experience",
        name: "Employee Experience",
        category: Category::Human,
        description: "Quality of employee experience and engagement",
        weight: 0.8,
        questions: &[
            scale("employee_nps", "What is your employee Net Promoter Score?", 0.5),
            scale("digital_workplace", "How digital is your workplace?", 0.5),
        ],
        metrics: &["Employee satisfaction", "Retention rate", "Productivity"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Low engagement", "High turnover", "Traditional workplace"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["High engagement", "Low turnover", "Digital-first workplace"],
            },
        ],
    },
    // Business
    Dimension {
        id: "strategy_alignment",
        name: "Strategy & Alignment",
        category: Category::Business,
        description: "AI alignment with business strategy",
        weight: 0.9,
        questions: &[
            scale(
                "ai_business_alignment",
                "How well is AI aligned with business strategy?",
                0.6,
            ),
            yes_no(
                "strategic_priorities",
                "Is AI in your top 3 strategic priorities?",
                0.4,
            ),
        ],
        metrics: &["Strategy execution", "Goal achievement", "ROI realization"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No AI strategy", "Misaligned initiatives", "Tactical focus"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["AI-driven strategy", "Full alignment", "Strategic excellence"],
            },
        ],
    },
    Dimension {
        id: "process_optimization",
        name: "Process Optimization",
        category: Category::Business,
        description: "Business process maturity and optimization",
        weight: 0.8,
        questions: &[
            scale(
                "process_automation",
                "What percentage of processes are automated?",
                0.5,
            ),
            yes_no(
                "process_documentation",
                "Are your processes well-documented?",
                0.5,
            ),
        ],
        metrics: &["Process efficiency", "Automation rate", "Error reduction"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Manual processes", "No documentation", "Inefficient workflows"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Intelligent automation",
                    "Self-optimizing processes",
                    "Zero-touch workflows",
                ],
            },
        ],
    },
    Dimension {
        id: "customer_centricity",
        name: "Customer Centricity",
        category: Category::Business,
        description: "Customer focus and experience optimization",
        weight: 0.8,
        questions: &[
            scale(
                "customer_data",
                "How well do you understand your customers through data?",
                0.5,
            ),
            yes_no(
                "personalization",
                "Do you offer personalized experiences?",
                0.5,
            ),
        ],
        metrics: &["Customer satisfaction", "NPS score", "Customer lifetime value"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &[
                    "Limited customer insight",
                    "Generic experiences",
                    "Reactive service",
                ],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "360-degree customer view",
                    "Hyper-personalization",
                    "Predictive service",
                ],
            },
        ],
    },
    Dimension {
        id: "innovation_capability",
        name: "Innovation Capability",
        category: Category::Business,
        description: "Ability to innovate and create new value",
        weight: 0.7,
        questions: &[
            yes_no(
                "innovation_process",
                "Do you have a formal innovation process?",
                0.5,
            ),
            scale(
                "innovation_budget",
                "What percentage of revenue goes to innovation?",
                0.5,
            ),
        ],
        metrics: &["Innovation pipeline", "New product revenue", "Time to market"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No innovation process", "Risk aversion", "Slow to market"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Innovation engine", "Fail fast culture", "Market leader"],
            },
        ],
    },
    Dimension {
        id: "financial_performance",
        name: "Financial Performance",
        category: Category::Business,
        description: "Financial health and investment capacity",
        weight: 0.8,
        questions: &[
            scale("revenue_growth", "What is your revenue growth rate?", 0.5),
            yes_no("ai_budget", "Do you have dedicated AI budget?", 0.5),
        ],
        metrics: &["Revenue growth", "Profit margins", "AI ROI"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["Limited budget", "Cost focus", "No AI investment"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Strong growth", "AI-driven revenue", "Strategic investments"],
            },
        ],
    },
    Dimension {
        id: "partner_ecosystem",
        name: "Partner Ecosystem",
        category: Category::Business,
        description: "Strength of partner and vendor relationships",
        weight: 0.6,
        questions: &[
            yes_no(
                "strategic_partners",
                "Do you have strategic AI partners?",
                0.5,
            ),
            scale(
                "ecosystem_maturity",
                "How mature is your partner ecosystem?",
                0.5,
            ),
        ],
        metrics: &[
            "Partner satisfaction",
            "Ecosystem value",
            "Collaboration effectiveness",
        ],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &[
                    "Limited partnerships",
                    "Transactional relationships",
                    "Vendor lock-in",
                ],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Strategic ecosystem", "Value co-creation", "Platform approach"],
            },
        ],
    },
    Dimension {
        id: "risk_management",
        name: "Risk Management",
        category: Category::Business,
        description: "Risk identification and management capabilities",
        weight: 0.7,
        questions: &[
            yes_no("risk_framework", "Do you have an AI risk framework?", 0.5),
            scale(
                "risk_mitigation",
                "How proactive is your risk management?",
                0.5,
            ),
        ],
        metrics: &["Risk score", "Incident rate", "Mitigation effectiveness"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No risk framework", "Reactive approach", "High exposure"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Comprehensive framework",
                    "Predictive risk management",
                    "Resilient",
                ],
            },
        ],
    },
    // AI adoption
    Dimension {
        id: "ai_use_cases",
        name: "AI Use Cases",
        category: Category::AiAdoption,
        description: "Current and planned AI use cases",
        weight: 0.8,
        questions: &[
            scale(
                "current_use_cases",
                "How many AI use cases are in production?",
                0.5,
            ),
            scale(
                "use_case_impact",
                "What is the business impact of your AI use cases?",
                0.5,
            ),
        ],
        metrics: &["Use case count", "Business impact", "Success rate"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No AI use cases", "Experimental only", "No clear value"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Enterprise-wide AI",
                    "Transformative impact",
                    "Continuous innovation",
                ],
            },
        ],
    },
    Dimension {
        id: "ml_operations",
        name: "ML Operations",
        category: Category::AiAdoption,
        description: "Machine learning operations maturity",
        weight: 0.7,
        questions: &[
            yes_no("mlops_platform", "Do you have an MLOps platform?", 0.5),
            scale(
                "model_governance",
                "How mature is your model governance?",
                0.5,
            ),
        ],
        metrics: &["Model accuracy", "Deployment frequency", "Model drift"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No MLOps", "Manual deployment", "No monitoring"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Automated MLOps",
                    "Continuous deployment",
                    "Self-healing models",
                ],
            },
        ],
    },
    Dimension {
        id: "ai_governance",
        name: "AI Governance",
        category: Category::AiAdoption,
        description: "AI governance and ethical frameworks",
        weight: 0.8,
        questions: &[
            yes_no("ai_ethics_board", "Do you have an AI ethics board?", 0.5),
            yes_no("bias_monitoring", "Do you monitor for AI bias?", 0.5),
        ],
        metrics: &["Compliance score", "Bias incidents", "Transparency index"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No governance", "No ethics framework", "Black box AI"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Comprehensive governance",
                    "Ethical AI leader",
                    "Full transparency",
                ],
            },
        ],
    },
    Dimension {
        id: "data_science_maturity",
        name: "Data Science Maturity",
        category: Category::AiAdoption,
        description: "Data science capabilities and practices",
        weight: 0.8,
        questions: &[
            yes_no(
                "data_science_team",
                "Do you have a dedicated data science team?",
                0.5,
            ),
            scale(
                "advanced_analytics",
                "How advanced are your analytics capabilities?",
                0.5,
            ),
        ],
        metrics: &["Model performance", "Insights generated", "Business value"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No data science", "Basic analytics", "Descriptive only"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Advanced data science",
                    "Prescriptive analytics",
                    "AI research",
                ],
            },
        ],
    },
    Dimension {
        id: "automation_level",
        name: "Automation Level",
        category: Category::AiAdoption,
        description: "Degree of intelligent automation",
        weight: 0.7,
        questions: &[
            scale("rpa_adoption", "What is your RPA adoption level?", 0.4),
            yes_no(
                "intelligent_automation",
                "Do you use intelligent automation (RPA + AI)?",
                0.6,
            ),
        ],
        metrics: &["Automation rate", "Cost savings", "Error reduction"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No automation", "Manual processes", "High error rate"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &[
                    "Intelligent automation",
                    "Self-learning systems",
                    "Zero-touch processes",
                ],
            },
        ],
    },
    Dimension {
        id: "ai_infrastructure",
        name: "AI Infrastructure",
        category: Category::AiAdoption,
        description: "Technical infrastructure for AI workloads",
        weight: 0.7,
        questions: &[
            yes_no(
                "gpu_infrastructure",
                "Do you have GPU infrastructure for AI?",
                0.5,
            ),
            yes_no("ai_platform", "Do you have an enterprise AI platform?", 0.5),
        ],
        metrics: &["Computing capacity", "Platform utilization", "Cost efficiency"],
        maturity_indicators: &[
            MaturityIndicator {
                level: 0,
                indicators: &["No AI infrastructure", "Limited compute", "Ad-hoc tools"],
            },
            MaturityIndicator {
                level: 5,
                indicators: &["Advanced infrastructure", "Elastic compute", "Unified platform"],
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn catalog() -> &'static [Dimension] {
    CATALOG
}

pub fn dimension(id: &str) -> Option<&'static Dimension> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Dimensions in a category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Dimension> {
    CATALOG.iter().filter(move |d| d.category == category)
}

/// Flat lookup of a question and its owning dimension.
pub fn question(id: &str) -> Option<(&'static Dimension, &'static Question)> {
    CATALOG
        .iter()
        .find_map(|d| d.question(id).map(|q| (d, q)))
}

pub fn question_count() -> usize {
    CATALOG.iter().map(|d| d.questions.len()).sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_23_dimensions() {
        assert_eq!(CATALOG.len(), 23);
    }

    #[test]
    fn category_partition_is_5_5_7_6() {
        assert_eq!(by_category(Category::Technical).count(), 5);
        assert_eq!(by_category(Category::Human).count(), 5);
        assert_eq!(by_category(Category::Business).count(), 7);
        assert_eq!(by_category(Category::AiAdoption).count(), 6);
    }

    #[test]
    fn question_ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for dim in CATALOG {
            for q in dim.questions {
                assert!(seen.insert(q.id), "duplicate question id: {}", q.id);
            }
        }
    }

    #[test]
    fn dimension_ids_are_unique() {
        let mut seen = HashSet::new();
        for dim in CATALOG {
            assert!(seen.insert(dim.id), "duplicate dimension id: {}", dim.id);
        }
    }

    #[test]
    fn multiple_choice_questions_have_at_least_two_options() {
        for dim in CATALOG {
            for q in dim.questions {
                match q.kind {
                    QuestionKind::MultipleChoice => {
                        assert!(q.options.len() >= 2, "{} has too few options", q.id)
                    }
                    _ => assert!(q.options.is_empty(), "{} has stray options", q.id),
                }
            }
        }
    }

    #[test]
    fn weights_are_positive() {
        for dim in CATALOG {
            assert!(dim.weight > 0.0 && dim.weight <= 1.0, "{}", dim.id);
            for q in dim.questions {
                assert!(q.weight > 0.0 && q.weight <= 1.0, "{}", q.id);
            }
        }
    }

    #[test]
    fn question_lookup_finds_owner() {
        let (dim, q) = question("data_architecture").unwrap();
        assert_eq!(dim.id, "tech_infrastructure");
        assert_eq!(q.kind, QuestionKind::Scale);
        assert!(question("no_such_question").is_none());
    }

    #[test]
    fn question_count_matches_catalog() {
        // 3 questions in tech_infrastructure, 2 in each of the other 22.
        assert_eq!(question_count(), 47);
    }
}
