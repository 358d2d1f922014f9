//! answer-bot CLI: run the Telegram bot, solve or normalize one text. Config from env and optional CLI args.

use std::sync::Arc;

use anyhow::Result;
use answer_cli::{normalize_text, run_bot, solve_text, BotConfig, Cli, Commands, StdoutReplier};
use answer_pipeline::PipelineConfig;
use answer_solvers::SolverContext;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Solve { text } => {
            let pipeline = PipelineConfig::from_env()?;
            let solvers = SolverContext::from_env()?;
            let stats = solve_text(&pipeline, &solvers, &text, Arc::new(StdoutReplier)).await?;
            if stats.failed > 0 {
                anyhow::bail!("Failed to resolve text");
            }
            Ok(())
        }
        Commands::Normalize { text } => {
            println!("{}", normalize_text(&text).await?);
            Ok(())
        }
    }
}
