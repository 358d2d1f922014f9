//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "answer-bot")]
#[command(about = "Telegram bot answering text queries: run, solve, normalize", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run one text through the pipeline and print the rendered reply (nothing when discarded).
    Solve { text: String },
    /// Print the normalized form of a text.
    Normalize { text: String },
}
