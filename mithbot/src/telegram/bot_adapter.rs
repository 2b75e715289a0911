//! Wraps teloxide::Bot behind the core [`crate::core::Bot`] trait. Production
//! code sends through Telegram; tests substitute a recording implementation.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::core::{Bot as CoreBot, Chat, MithbotError, Result};

/// Thin wrapper around teloxide::Bot implementing the core send seam.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| MithbotError::Transport(e.to_string()))?;
        Ok(())
    }
}
