//! Inbound update model: one event from the messaging transport.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Category of an inbound update, as far as the dispatcher needs to see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UpdateKind {
    /// Command or free text.
    Text(String),
    /// Members joined the chat (membership-change service message).
    NewMembers(Vec<User>),
    /// Anything else; dropped without a handler.
    Unsupported,
}

/// One inbound event with its chat, optional sender, and classified kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub chat: Chat,
    pub sender: Option<User>,
    pub kind: UpdateKind,
}
