use crate::output::print_json;
use anyhow::Context;
use maturity_agents::Orchestrator;
use maturity_core::answer::AnswerSet;
use maturity_core::config::AssessmentConfig;
use maturity_core::report::{AssessmentContext, AssessmentData, AssessmentResult};
use std::path::Path;

pub fn run(
    config: AssessmentConfig,
    answers_path: &Path,
    org: &str,
    industry: &str,
    size: &str,
    region: &str,
    json: bool,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(answers_path)
        .with_context(|| format!("failed to read answers file {}", answers_path.display()))?;
    let responses: AnswerSet =
        serde_json::from_str(&raw).context("failed to parse answers file")?;

    let data = AssessmentData {
        organization_id: org.to_string(),
        responses,
        context: AssessmentContext {
            industry: industry.to_string(),
            size: size.to_string(),
            region: region.to_string(),
            current_challenges: Vec::new(),
        },
    };

    let orchestrator = Orchestrator::new(config);
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let result = rt
        .block_on(orchestrator.orchestrate(&data))
        .context("assessment failed")?;

    if json {
        return print_json(&*result);
    }
    print_report(&result);
    Ok(())
}

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

fn print_report(result: &AssessmentResult) {
    println!(
        "Organization {} is at Level {}: {}",
        result.organization_id, result.overall_maturity_level, result.maturity.name
    );
    println!("{}", result.maturity.description);
    println!();

    println!("Category scores:");
    println!("  technical    {:.2}", result.category_scores.technical);
    println!("  human        {:.2}", result.category_scores.human);
    println!("  business     {:.2}", result.category_scores.business);
    println!("  ai_adoption  {:.2}", result.category_scores.ai_adoption);
    println!();

    if !result.top_strengths.is_empty() {
        println!("Top strengths:");
        for s in &result.top_strengths {
            println!("  + {s}");
        }
    }
    if !result.critical_gaps.is_empty() {
        println!("Critical gaps:");
        for g in &result.critical_gaps {
            println!("  - {g}");
        }
    }
    println!();

    print_bucket("Immediate recommendations", &result.recommendations.immediate);
    print_bucket("Short-term recommendations", &result.recommendations.short_term);
    print_bucket("Long-term recommendations", &result.recommendations.long_term);

    println!("Roadmap:");
    for phase in &result.roadmap {
        println!(
            "  Phase {}: {} ({}, {:?}, {})",
            phase.phase, phase.name, phase.duration, phase.priority, phase.investment
        );
    }
    println!();

    println!(
        "Estimated ROI: year 1 ${}, year 3 ${}, year 5 ${}",
        result.estimated_roi.year1, result.estimated_roi.year3, result.estimated_roi.year5
    );
    println!();

    print_bucket("High risks", &result.risk_analysis.high);
    print_bucket("Medium risks", &result.risk_analysis.medium);
    print_bucket("Low risks", &result.risk_analysis.low);

    println!(
        "Estimated time to next level: {}",
        result.maturity.estimated_time_to_next
    );
}

fn print_bucket(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
    println!();
}
