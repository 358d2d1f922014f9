//! # Dispatcher
//!
//! Drains the ingestion queue and hands each item to the handler registered for its tag. Items with no registered
//! handler are ignored; handler failures are logged and counted, and draining continues.

use crate::item::{ItemTag, QueueItem};
use crate::queue::QueueReceiver;
use answer_core::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info, instrument};

/// Callback invoked for every queue item of the tag it is registered under.
#[async_trait]
pub trait ItemHandler: Send + Sync {
    async fn handle(&self, item: &QueueItem) -> Result<()>;
}

/// Counts returned by [`Dispatcher::run`] once the queue is closed and drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Handler returned Ok.
    pub handled: u64,
    /// No handler registered for the item's tag.
    pub ignored: u64,
    /// Handler returned Err (or its task panicked).
    pub failed: u64,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Handled,
    Ignored,
    Failed,
}

impl DispatchStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Handled => self.handled += 1,
            Outcome::Ignored => self.ignored += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Registration table (tag → handler) plus the draining loop.
#[derive(Clone)]
pub struct Dispatcher {
    handlers: HashMap<ItemTag, Arc<dyn ItemHandler>>,
    max_concurrency: usize,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers that processes one item at a time.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            max_concurrency: 1,
        }
    }

    /// Registers `handler` for every item tagged `tag`. Replaces a previous registration for the same tag.
    pub fn add_handler(mut self, tag: ItemTag, handler: Arc<dyn ItemHandler>) -> Self {
        self.handlers.insert(tag, handler);
        self
    }

    /// Maximum number of items handled at once. 1 (default) handles each item to completion before the next;
    /// values below 1 are treated as 1.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Drains `receiver` until every producer handle is dropped. With concurrency > 1, waits for in-flight items
    /// before returning.
    #[instrument(skip(self, receiver), fields(max_concurrency = self.max_concurrency))]
    pub async fn run(&self, mut receiver: QueueReceiver) -> DispatchStats {
        info!(handlers = self.handlers.len(), "step: dispatcher started");
        let stats = if self.max_concurrency == 1 {
            let mut stats = DispatchStats::default();
            while let Some(item) = receiver.recv().await {
                let handler = self.handlers.get(&item.tag()).cloned();
                stats.record(dispatch_one(handler, item).await);
            }
            stats
        } else {
            self.run_concurrent(receiver).await
        };
        info!(
            handled = stats.handled,
            ignored = stats.ignored,
            failed = stats.failed,
            "step: dispatcher finished"
        );
        stats
    }

    /// Spawns [`run`](Self::run) onto the runtime.
    pub fn spawn(self, receiver: QueueReceiver) -> JoinHandle<DispatchStats> {
        tokio::spawn(async move { self.run(receiver).await })
    }

    async fn run_concurrent(&self, mut receiver: QueueReceiver) -> DispatchStats {
        let permits = Arc::new(Semaphore::new(self.max_concurrency));
        let mut in_flight = JoinSet::new();
        let mut stats = DispatchStats::default();

        while let Some(item) = receiver.recv().await {
            while let Some(done) = in_flight.try_join_next() {
                stats.record(joined(done));
            }
            let handler = self.handlers.get(&item.tag()).cloned();
            let Ok(permit) = permits.clone().acquire_owned().await else {
                break;
            };
            in_flight.spawn(async move {
                let outcome = dispatch_one(handler, item).await;
                drop(permit);
                outcome
            });
        }

        while let Some(done) = in_flight.join_next().await {
            stats.record(joined(done));
        }
        stats
    }
}

async fn dispatch_one(handler: Option<Arc<dyn ItemHandler>>, item: QueueItem) -> Outcome {
    let tag = item.tag();
    let Some(handler) = handler else {
        debug!(tag = %tag, "no handler registered, item ignored");
        return Outcome::Ignored;
    };
    match handler.handle(&item).await {
        Ok(()) => {
            debug!(tag = %tag, "step: item handled");
            Outcome::Handled
        }
        Err(e) => {
            error!(error = %e, tag = %tag, "Item handler failed");
            Outcome::Failed
        }
    }
}

fn joined(result: std::result::Result<Outcome, tokio::task::JoinError>) -> Outcome {
    result.unwrap_or_else(|e| {
        error!(error = %e, "Item handler task panicked");
        Outcome::Failed
    })
}
