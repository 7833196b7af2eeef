mod cmd;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use maturity_core::config::AssessmentConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maturity",
    about = "AI maturity assessment — score organizations across 23 dimensions and generate a transformation report",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Assessment configuration file (YAML); built-in defaults apply when omitted
    #[arg(long, global = true, env = "MATURITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answers file and print the maturity report
    Assess {
        /// JSON file mapping question id -> typed answer
        #[arg(long)]
        answers: PathBuf,

        /// Organization identifier
        #[arg(long, default_value = "org-local")]
        org: String,

        #[arg(long, default_value = "General")]
        industry: String,

        #[arg(long, default_value = "Medium")]
        size: String,

        #[arg(long, default_value = "Global")]
        region: String,
    },

    /// Run the conversational assessment on stdin/stdout
    Chat,

    /// List the dimension catalog
    Dimensions {
        /// Restrict to one category (technical, human, business, ai_adoption)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the maturity model, or one level in detail
    Levels {
        /// Level number (0-9)
        level: Option<u8>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = run(cli);
    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AssessmentConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AssessmentConfig::default(),
    };

    match cli.command {
        Commands::Assess {
            answers,
            org,
            industry,
            size,
            region,
        } => cmd::assess::run(config, &answers, &org, &industry, &size, &region, cli.json),
        Commands::Chat => cmd::chat::run(config),
        Commands::Dimensions { category } => cmd::dimensions::run(category.as_deref(), cli.json),
        Commands::Levels { level } => cmd::levels::run(level, cli.json),
    }
}
