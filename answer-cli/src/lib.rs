//! # answer-cli
//!
//! CLI foundation for the `answer-bot` binary: argument parsing, config loading, pipeline wiring.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_stage, normalize_text, run_bot, solve_text, StdoutReplier, CLI_CONVERSATION_ID};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
