//! Adapters between Telegram (teloxide) types and answer_core types.
//! Depends only on teloxide and answer_core type definitions.

use answer_core::{AnswerError, ButtonAction, Keyboard, LinkPreview, Markup, Result, Update};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions, ParseMode};

/// Wraps a teloxide Message for conversion to a core [`Update`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    /// Update for a text message (chat id + raw text); `None` for messages without text.
    pub fn to_update(&self) -> Option<Update> {
        self.0
            .text()
            .map(|text| Update::new(self.0.chat.id.0, text))
    }
}

/// Parse mode matching the markup the body was rendered in.
pub fn parse_mode(markup: Markup) -> ParseMode {
    match markup {
        Markup::MarkdownV2 => ParseMode::MarkdownV2,
        Markup::Html => ParseMode::Html,
    }
}

pub fn link_preview_options(preview: &LinkPreview) -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: preview.disabled,
        url: preview.url.clone(),
        prefer_small_media: preview.prefer_small_media,
        prefer_large_media: preview.prefer_large_media,
        show_above_text: preview.show_above_text,
    }
}

/// Inline keyboard for a core [`Keyboard`]. Fails on a URL button whose URL does not parse.
pub fn inline_keyboard(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup> {
    let mut rows = Vec::with_capacity(keyboard.rows.len());
    for row in &keyboard.rows {
        let mut buttons = Vec::with_capacity(row.len());
        for button in row {
            let button = match &button.action {
                ButtonAction::Url(url) => {
                    let url = reqwest::Url::parse(url).map_err(|e| {
                        AnswerError::Channel(format!("Invalid button url {}: {}", url, e))
                    })?;
                    InlineKeyboardButton::url(button.label.clone(), url)
                }
                ButtonAction::Callback(data) => {
                    InlineKeyboardButton::callback(button.label.clone(), data.clone())
                }
            };
            buttons.push(button);
        }
        rows.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}
