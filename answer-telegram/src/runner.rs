//! REPL runner: converts teloxide text messages to core Updates and appends them to the ingestion queue. The
//! dispatcher draining the queue runs separately.

use crate::adapters::TelegramMessageWrapper;
use crate::config::TelegramConfig;
use answer_pipeline::{QueueHandle, QueueItem};
use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

/// Builds a teloxide Bot from config, pointing it at TELEGRAM_API_URL when set.
pub fn build_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Starts the REPL with the given teloxide Bot. Every text message is enqueued as an Update (chat id + raw text);
/// other messages are skipped. Returns when the REPL stops (e.g. Ctrl-C).
#[instrument(skip(bot, queue))]
pub async fn run_repl(bot: teloxide::Bot, queue: QueueHandle) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot username resolved before repl");
        }
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let queue = queue.clone();

        async move {
            match TelegramMessageWrapper(&msg).to_update() {
                Some(update) => {
                    info!(
                        chat_id = update.conversation_id(),
                        message_id = %msg.id,
                        "Received message"
                    );
                    if let Err(e) = queue.push(QueueItem::Text(update)).await {
                        error!(error = %e, chat_id = msg.chat.id.0, "Failed to enqueue update");
                    }
                }
                None => {
                    info!(chat_id = msg.chat.id.0, "Received non-text message");
                }
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}
