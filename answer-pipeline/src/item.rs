//! Tagged items carried by the ingestion queue.

use answer_core::Update;
use std::fmt;

/// Tag of a [`QueueItem`]; the dispatcher's registration table is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemTag {
    Text,
    Raw(String),
}

impl fmt::Display for ItemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemTag::Text => f.write_str("text"),
            ItemTag::Raw(tag) => write!(f, "raw:{}", tag),
        }
    }
}

/// One queue entry. The resolver stage only reacts to [`QueueItem::Text`]; other producers may share the queue
/// with their own tagged payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueItem {
    Text(Update),
    Raw {
        tag: String,
        payload: serde_json::Value,
    },
}

impl QueueItem {
    pub fn tag(&self) -> ItemTag {
        match self {
            QueueItem::Text(_) => ItemTag::Text,
            QueueItem::Raw { tag, .. } => ItemTag::Raw(tag.clone()),
        }
    }
}

impl From<Update> for QueueItem {
    fn from(update: Update) -> Self {
        QueueItem::Text(update)
    }
}
