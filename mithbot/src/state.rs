//! Conversation state: the single process-wide flag plus the bot identity
//! constant.

use std::sync::atomic::{AtomicBool, Ordering};

/// Name the bot reports for /name.
pub const BOT_NAME: &str = "MithforTelegramBot";

/// Process-wide conversation flag. False until a /start completion succeeds;
/// reset to false when a /start attempt fails. Not persisted, not scoped per
/// chat. Shared behind `Arc` between the dispatcher and spawned tasks.
#[derive(Debug, Default)]
pub struct ConversationState {
    started: AtomicBool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// True when a conversation has been started and has not failed since.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn set_started(&self, started: bool) {
        self.started.store(started, Ordering::SeqCst);
    }
}
