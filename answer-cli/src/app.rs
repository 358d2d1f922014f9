//! Wiring: builds the resolver stage from config and drives it from Telegram or from a single CLI text.

use std::sync::Arc;

use anyhow::{Context, Result};
use answer_core::{init_tracing, ConversationId, Normalizer, OutboundReply, Replier};
use answer_pipeline::{enqueue_update, start_pipeline, DispatchStats, PipelineConfig, ResolverStage};
use answer_solvers::{create_normalizer, create_solver, SolverContext};
use answer_telegram::{build_bot, run_repl, TelegramReplier};
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Conversation id used for texts given on the command line.
pub const CLI_CONVERSATION_ID: ConversationId = 0;

/// Prints each reply body on its own line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReplier;

#[async_trait]
impl Replier for StdoutReplier {
    async fn send(&self, reply: &OutboundReply) -> answer_core::Result<()> {
        println!("{}", reply.body);
        Ok(())
    }
}

/// Resolver stage with the configured solvers and the URL normalizer.
pub fn build_stage(solvers: &SolverContext, replier: Arc<dyn Replier>) -> ResolverStage {
    ResolverStage::new(create_normalizer(), create_solver(solvers), replier)
}

/// Runs the bot until the REPL stops, then drains the queue.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.telegram.log_file.as_deref())?;

    let bot = build_bot(&config.telegram);
    let stage = build_stage(&config.solvers, Arc::new(TelegramReplier::new(bot.clone())));
    let (queue, dispatcher) = start_pipeline(&config.pipeline, stage)?;

    info!("Bot started successfully");
    run_repl(bot, queue).await?;

    let stats = dispatcher.await.context("Dispatcher task panicked")?;
    info!(
        handled = stats.handled,
        ignored = stats.ignored,
        failed = stats.failed,
        "Bot stopped"
    );
    Ok(())
}

/// Runs `text` through a fresh pipeline as one Update and waits until it is resolved.
pub async fn solve_text(
    pipeline: &PipelineConfig,
    solvers: &SolverContext,
    text: &str,
    replier: Arc<dyn Replier>,
) -> Result<DispatchStats> {
    let (queue, dispatcher) = start_pipeline(pipeline, build_stage(solvers, replier))?;
    enqueue_update(CLI_CONVERSATION_ID, text, &queue).await?;
    drop(queue);
    dispatcher.await.context("Dispatcher task panicked")
}

pub async fn normalize_text(text: &str) -> Result<String> {
    Ok(create_normalizer().normalize(text).await?)
}
