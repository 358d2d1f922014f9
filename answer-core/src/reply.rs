//! Replier abstraction for delivering a rendered answer.
//!
//! [`Replier`] is transport-agnostic; answer-telegram implements it via teloxide.

use crate::error::Result;
use crate::markup::Markup;
use crate::types::{Answer, ConversationId, Keyboard, LinkPreview};
use async_trait::async_trait;

/// A reply ready to be sent: body already rendered in `markup`, attachment and preview policy forwarded from the [`Answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub conversation_id: ConversationId,
    pub body: String,
    pub markup: Markup,
    pub keyboard: Option<Keyboard>,
    pub link_preview: LinkPreview,
}

impl OutboundReply {
    /// Renders the answer text verbatim in `markup`; keyboard and link preview are moved over unchanged.
    pub fn verbatim(conversation_id: ConversationId, answer: Answer, markup: Markup) -> Self {
        Self {
            conversation_id,
            body: markup.verbatim(&answer.text),
            markup,
            keyboard: answer.keyboard,
            link_preview: answer.link_preview,
        }
    }
}

/// Sends a rendered reply to a conversation. Implementations map to a transport (e.g. Telegram).
///
/// No dedup: two calls with equal arguments produce two sends.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn send(&self, reply: &OutboundReply) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Button;

    #[test]
    fn test_verbatim_forwards_attachment_and_preview() {
        let keyboard = Keyboard::single(Button::callback("Again", "again"));
        let answer = Answer::new("x`y")
            .with_keyboard(keyboard.clone())
            .with_link_preview(LinkPreview::enabled());

        let reply = OutboundReply::verbatim(7, answer, Markup::MarkdownV2);

        assert_eq!(reply.conversation_id, 7);
        assert_eq!(reply.body, "`x\\`y`");
        assert_eq!(reply.markup, Markup::MarkdownV2);
        assert_eq!(reply.keyboard, Some(keyboard));
        assert_eq!(reply.link_preview, LinkPreview::enabled());
    }
}
