//! # answer-pipeline
//!
//! Asynchronous ingestion-and-resolution pipeline: producers append [`QueueItem`]s to an [`IngestionQueue`]; the
//! [`Dispatcher`] drains it and hands text items to the [`ResolverStage`], which normalizes, solves and replies.

pub mod config;
pub mod dispatcher;
pub mod item;
pub mod queue;
pub mod resolver;

pub use config::{PipelineConfig, DEFAULT_QUEUE_CAPACITY};
pub use dispatcher::{DispatchStats, Dispatcher, ItemHandler};
pub use item::{ItemTag, QueueItem};
pub use queue::{enqueue_update, IngestionQueue, QueueHandle, QueueReceiver};
pub use resolver::{Resolution, ResolverStage};

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Builds the queue for `config`, registers `stage` for text items and spawns the dispatcher.
/// Returns the producer handle and the dispatcher task; the task ends once every handle is dropped.
pub fn start_pipeline(
    config: &PipelineConfig,
    stage: ResolverStage,
) -> anyhow::Result<(QueueHandle, JoinHandle<DispatchStats>)> {
    config.validate()?;
    let (queue, receiver) = IngestionQueue::with_capacity(config.queue_capacity)?;
    let stage = stage.with_markup(config.markup);

    info!(
        queue_capacity = ?config.queue_capacity,
        max_concurrency = config.max_concurrency,
        markup = %config.markup,
        "Starting pipeline"
    );

    let dispatcher = Dispatcher::new()
        .add_handler(ItemTag::Text, Arc::new(stage))
        .with_max_concurrency(config.max_concurrency);
    Ok((queue, dispatcher.spawn(receiver)))
}
