//! Ingestion queue: async FIFO hand-off between producers (channel inbound loop, API bridges) and the dispatcher.

use crate::item::QueueItem;
use answer_core::{AnswerError, ConversationId, Result, Update};
use tokio::sync::mpsc;

#[derive(Clone)]
enum Sender {
    Bounded(mpsc::Sender<QueueItem>),
    Unbounded(mpsc::UnboundedSender<QueueItem>),
}

enum Receiver {
    Bounded(mpsc::Receiver<QueueItem>),
    Unbounded(mpsc::UnboundedReceiver<QueueItem>),
}

/// Constructors for the queue halves.
pub struct IngestionQueue;

impl IngestionQueue {
    /// Bounded queue: `enqueue` suspends while the queue is full. `capacity` must be > 0.
    pub fn bounded(capacity: usize) -> Result<(QueueHandle, QueueReceiver)> {
        if capacity == 0 {
            return Err(AnswerError::Config(
                "ingestion queue capacity must be greater than 0".to_string(),
            ));
        }
        let (tx, rx) = mpsc::channel(capacity);
        Ok((
            QueueHandle {
                tx: Sender::Bounded(tx),
            },
            QueueReceiver {
                rx: Receiver::Bounded(rx),
            },
        ))
    }

    /// Unbounded queue: `enqueue` never suspends.
    pub fn unbounded() -> (QueueHandle, QueueReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            QueueHandle {
                tx: Sender::Unbounded(tx),
            },
            QueueReceiver {
                rx: Receiver::Unbounded(rx),
            },
        )
    }

    /// `Some(n)` → bounded, `None` → unbounded.
    pub fn with_capacity(capacity: Option<usize>) -> Result<(QueueHandle, QueueReceiver)> {
        match capacity {
            Some(n) => Self::bounded(n),
            None => Ok(Self::unbounded()),
        }
    }
}

/// Producer side. Cheap to clone; the queue closes once every handle is dropped.
#[derive(Clone)]
pub struct QueueHandle {
    tx: Sender,
}

impl QueueHandle {
    /// Constructs an [`Update`] and appends it. No validation: empty text is accepted and left to the resolver stage.
    pub async fn enqueue(&self, conversation_id: ConversationId, text: impl Into<String>) -> Result<()> {
        self.push(QueueItem::Text(Update::new(conversation_id, text)))
            .await
    }

    /// Appends any tagged item.
    pub async fn push(&self, item: QueueItem) -> Result<()> {
        match &self.tx {
            Sender::Bounded(tx) => tx.send(item).await.map_err(|_| AnswerError::QueueClosed),
            Sender::Unbounded(tx) => tx.send(item).map_err(|_| AnswerError::QueueClosed),
        }
    }

    /// True once the receiver has been dropped or closed.
    pub fn is_closed(&self) -> bool {
        match &self.tx {
            Sender::Bounded(tx) => tx.is_closed(),
            Sender::Unbounded(tx) => tx.is_closed(),
        }
    }
}

/// Appends an [`Update`] built from `conversation_id` and `text` to `queue`.
pub async fn enqueue_update(
    conversation_id: ConversationId,
    text: impl Into<String>,
    queue: &QueueHandle,
) -> Result<()> {
    queue.enqueue(conversation_id, text).await
}

/// Consumer side, owned by the dispatcher.
pub struct QueueReceiver {
    rx: Receiver,
}

impl QueueReceiver {
    /// Next item in FIFO order; `None` once all handles are dropped and the queue is drained.
    pub async fn recv(&mut self) -> Option<QueueItem> {
        match &mut self.rx {
            Receiver::Bounded(rx) => rx.recv().await,
            Receiver::Unbounded(rx) => rx.recv().await,
        }
    }
}
