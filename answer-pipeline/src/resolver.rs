//! Resolver stage: trim → normalize → solve → reply, with silent discard of empty input and unanswered text.

use crate::dispatcher::ItemHandler;
use crate::item::QueueItem;
use answer_core::{Markup, Normalizer, OutboundReply, Replier, Result, Solver, Update};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// How a single update ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Trimmed text was empty; nothing was solved or sent.
    Empty,
    /// The solver had no answer; nothing was sent.
    NoAnswer,
    /// Exactly one reply was handed to the replier.
    Replied,
}

/// Processes one [`Update`] at a time to completion. Holds only shared, immutable capabilities, so the dispatcher
/// may run several invocations concurrently.
#[derive(Clone)]
pub struct ResolverStage {
    normalizer: Arc<dyn Normalizer>,
    solver: Arc<dyn Solver>,
    replier: Arc<dyn Replier>,
    markup: Markup,
}

impl ResolverStage {
    /// Creates a stage rendering replies in [`Markup::MarkdownV2`].
    pub fn new(
        normalizer: Arc<dyn Normalizer>,
        solver: Arc<dyn Solver>,
        replier: Arc<dyn Replier>,
    ) -> Self {
        Self {
            normalizer,
            solver,
            replier,
            markup: Markup::default(),
        }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Runs the stage for one update. Normalizer, solver and replier failures are returned as-is: no retry, no
    /// fallback answer, nothing sent to the conversation.
    pub async fn resolve(&self, update: &Update) -> Result<Resolution> {
        let text = update.text().trim();
        if text.is_empty() {
            debug!(chat_id = update.conversation_id(), "ignored empty message");
            return Ok(Resolution::Empty);
        }

        let text = self.normalizer.normalize(text).await?;

        let Some(answer) = self.solver.solve(&text).await? else {
            debug!(chat_id = update.conversation_id(), text = %text, "no answer");
            return Ok(Resolution::NoAnswer);
        };

        let reply = OutboundReply::verbatim(update.conversation_id(), answer, self.markup);
        self.replier.send(&reply).await?;
        Ok(Resolution::Replied)
    }
}

#[async_trait]
impl ItemHandler for ResolverStage {
    /// Resolves [`QueueItem::Text`]; any other item is ignored.
    async fn handle(&self, item: &QueueItem) -> Result<()> {
        match item {
            QueueItem::Text(update) => self.resolve(update).await.map(|_| ()),
            _ => Ok(()),
        }
    }
}
