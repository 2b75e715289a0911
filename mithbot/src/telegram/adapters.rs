//! Conversions from teloxide types to the core update model.

use crate::core::{Chat, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User};

/// Telegram user to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message to core [`Update`]: text, membership change, or
/// unsupported.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramUpdateWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }

    fn kind(&self) -> UpdateKind {
        if let Some(members) = self.0.new_chat_members() {
            return UpdateKind::NewMembers(
                members
                    .iter()
                    .map(|u| TelegramUserWrapper(u).to_core())
                    .collect(),
            );
        }
        match self.0.text() {
            Some(text) => UpdateKind::Text(text.to_string()),
            None => UpdateKind::Unsupported,
        }
    }
}

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Update {
        Update {
            id: self.0.id.to_string(),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            sender: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core()),
            kind: self.kind(),
        }
    }
}
