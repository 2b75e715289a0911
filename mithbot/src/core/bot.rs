//! Bot abstraction for sending messages.
//!
//! The [`Bot`] trait is transport-agnostic; the teloxide implementation lives
//! in [`crate::telegram`]. Tests substitute a recording implementation.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::Chat;

/// Abstraction for sending chat messages. Implementations map to a transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}
