//! Wraps teloxide::Bot and implements [`answer_core::Replier`]. Production code sends via Telegram; tests can
//! substitute another Replier impl.

use crate::adapters::{inline_keyboard, link_preview_options, parse_mode};
use answer_core::{AnswerError, OutboundReply, Replier, Result};
use async_trait::async_trait;
use teloxide::{payloads::SendMessageSetters, prelude::*, types::ChatId};

/// Thin wrapper around teloxide::Bot that sends rendered replies.
#[derive(Clone)]
pub struct TelegramReplier {
    bot: teloxide::Bot,
}

impl TelegramReplier {
    /// Creates a replier from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Replier for TelegramReplier {
    /// Sends `reply.body` with the parse mode of its markup, the link preview options, and the keyboard (if any)
    /// as an inline keyboard.
    async fn send(&self, reply: &OutboundReply) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(reply.conversation_id), reply.body.clone())
            .parse_mode(parse_mode(reply.markup))
            .link_preview_options(link_preview_options(&reply.link_preview));
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(inline_keyboard(keyboard)?);
        }
        request
            .await
            .map_err(|e| AnswerError::Channel(e.to_string()))?;
        Ok(())
    }
}
