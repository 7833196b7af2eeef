use anyhow::Context;
use maturity_agents::Orchestrator;
use maturity_core::config::AssessmentConfig;
use maturity_core::flow::{FlowAction, FlowDriver, FlowState};
use std::io::BufRead;

pub fn run(config: AssessmentConfig) -> anyhow::Result<()> {
    let organization_id = format!("org_{}", uuid::Uuid::new_v4());
    let mut driver = FlowDriver::new(organization_id);
    let orchestrator = Orchestrator::new(config);
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    // Kick the state machine into its greeting before reading any input.
    let opening = driver.advance("");
    println!("{}", opening.message);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let mut reply = driver.advance(input);
        println!("{}", reply.message);
        if let Some(progress) = reply.progress {
            println!(
                "[category {}/{}, {}/{} dimensions complete]",
                progress.current_category + 1,
                progress.total_categories,
                progress.completed_dimensions,
                progress.total_dimensions
            );
        }

        if let Some(FlowAction::RunAnalysis(data)) = reply.action.take() {
            match rt.block_on(orchestrator.orchestrate(&data)) {
                Ok(result) => println!("{}", driver.complete(&result)),
                Err(err) => {
                    tracing::warn!(error = %err, "assessment analysis failed");
                    println!("{}", driver.fail());
                }
            }
        }

        if driver.state() == FlowState::Completed {
            break;
        }
    }

    Ok(())
}
