//! Core types: inbound update, answer, keyboard, and link preview policy.

use serde::{Deserialize, Serialize};

/// Conversation identifier on the channel (e.g. Telegram chat id).
pub type ConversationId = i64;

/// One inbound text request tagged with its originating conversation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    conversation_id: ConversationId,
    text: String,
}

impl Update {
    pub fn new(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            text: text.into(),
        }
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Raw text as received; not trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// What a button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Opens the URL.
    Url(String),
    /// Sends the callback data back to the bot.
    Callback(String),
}

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }
}

/// Interactive attachment: rows of inline buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of buttons.
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        self.rows.push(buttons);
        self
    }

    /// Keyboard with a single one-button row.
    pub fn single(button: Button) -> Self {
        Self::new().row(vec![button])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
}

/// Link preview policy for the outbound message. Field meanings follow Telegram's LinkPreviewOptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    pub disabled: bool,
    /// URL to preview; when None the first URL in the text is used.
    pub url: Option<String>,
    pub prefer_small_media: bool,
    pub prefer_large_media: bool,
    pub show_above_text: bool,
}

impl LinkPreview {
    /// No preview is generated.
    pub fn suppressed() -> Self {
        Self {
            disabled: true,
            url: None,
            prefer_small_media: false,
            prefer_large_media: false,
            show_above_text: false,
        }
    }

    /// Channel default preview for the first URL in the text.
    pub fn enabled() -> Self {
        Self {
            disabled: false,
            ..Self::suppressed()
        }
    }

    /// Preview the given URL even if it does not appear in the text.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::enabled()
        }
    }
}

/// A resolved reply payload produced by a [`Solver`](crate::Solver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    pub link_preview: LinkPreview,
}

impl Answer {
    /// Answer with no keyboard and link preview suppressed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            link_preview: LinkPreview::suppressed(),
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_link_preview(mut self, link_preview: LinkPreview) -> Self {
        self.link_preview = link_preview;
        self
    }
}
