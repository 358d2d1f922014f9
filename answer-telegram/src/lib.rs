//! # answer-telegram
//!
//! Telegram transport layer: adapters between teloxide and answer-core types, the [`TelegramReplier`]
//! implementation of [`answer_core::Replier`], minimal config, and the REPL runner that feeds inbound text into the
//! ingestion queue. No solving logic.

mod adapters;
mod config;
mod replier;
mod runner;

pub use adapters::{inline_keyboard, link_preview_options, parse_mode, TelegramMessageWrapper};
pub use config::TelegramConfig;
pub use replier::TelegramReplier;
pub use runner::{build_bot, run_repl};
