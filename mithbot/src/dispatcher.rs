//! Command dispatch: classifies one inbound update and runs exactly one
//! handler.
//!
//! Quick handlers (greet, name, help, status, welcome) complete within
//! `dispatch`; handlers that need the completion client acknowledge first
//! and spawn a fire-and-forget task for the exchange, so the update loop is
//! never blocked on the completion API. No join handle is kept and no
//! ordering is guaranteed across concurrent exchanges. Completion failures
//! are converted into user-visible messages inside the task and never
//! propagate.

use std::sync::Arc;

use completion_client::{ChatMessage, CompletionClient, CompletionError};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::commands::Command;
use crate::core::{Bot, Chat, Result, Update, UpdateKind, User};
use crate::state::{ConversationState, BOT_NAME};

/// System-role priming prompt sent by /start.
pub const START_PROMPT: &str =
    "You are Latoken assistant. You will help me to know about latoken as much as possible.";

/// Acknowledgment sent before a free-text completion exchange.
pub const PROCESSING_MESSAGE: &str = "Processing...";

/// Fallback reply when the completion call fails or yields nothing.
pub const EMPTY_ANSWER_MESSAGE: &str = "empty answer";

/// Confirmation for a successful /start.
pub const START_CONFIRMED_MESSAGE: &str =
    "Conversation started. Send me a message and I will pass it on.";

/// Report for a failed /start.
pub const START_FAILED_MESSAGE: &str =
    "Could not start the conversation. Please try /start again.";

/// Instruction sent for free text while no conversation is active.
pub const NOT_STARTED_MESSAGE: &str = "No conversation is active. Send /start first.";

/// Deprecation notice for the legacy /chatGPT alias.
pub const DEPRECATED_ALIAS_MESSAGE: &str =
    "/chatGPT is deprecated. Once a conversation is started, just send your message as plain text.";

/// Status report for /status while a conversation is active.
pub const STATUS_ACTIVE_MESSAGE: &str = "Conversation is active.";

/// Status report for /status while no conversation is active.
pub const STATUS_NOT_ACTIVE_MESSAGE: &str = "Conversation is not active.";

/// Routes inbound updates to the fixed handler set.
///
/// Holds the send seam, the completion client, the conversation flag, and
/// the bot's own identity (populated from `get_me` before the loop runs;
/// used for welcome self-exclusion and command @-suffix matching).
#[derive(Clone)]
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    completion: Arc<dyn CompletionClient>,
    state: Arc<ConversationState>,
    bot_identity: Arc<RwLock<Option<User>>>,
}

impl Dispatcher {
    pub fn new(
        bot: Arc<dyn Bot>,
        completion: Arc<dyn CompletionClient>,
        state: Arc<ConversationState>,
        bot_identity: Arc<RwLock<Option<User>>>,
    ) -> Self {
        Self {
            bot,
            completion,
            state,
            bot_identity,
        }
    }

    /// Classifies one update and runs its handler.
    ///
    /// Command text wins over free text; membership changes go to the
    /// welcome handler; updates that fit no category are dropped without a
    /// response.
    #[instrument(skip(self, update), fields(update_id = %update.id, chat_id = update.chat.id))]
    pub async fn dispatch(&self, update: Update) -> Result<()> {
        match &update.kind {
            UpdateKind::Text(text) => {
                let bot_username = self
                    .bot_identity
                    .read()
                    .await
                    .as_ref()
                    .and_then(|u| u.username.clone());
                match Command::parse(text, bot_username.as_deref()) {
                    Some((command, remainder)) => {
                        info!(command = command.trigger(), "Dispatching command");
                        self.handle_command(&update, command, remainder).await
                    }
                    None => self.handle_free_text(&update.chat, text.clone()).await,
                }
            }
            UpdateKind::NewMembers(members) => self.handle_new_members(&update.chat, members).await,
            UpdateKind::Unsupported => {
                debug!("Dropping unsupported update");
                Ok(())
            }
        }
    }

    async fn handle_command(
        &self,
        update: &Update,
        command: Command,
        remainder: String,
    ) -> Result<()> {
        match command {
            Command::Greet => self.handle_greet(update).await,
            Command::Name => {
                self.bot
                    .send_message(&update.chat, &format!("My name is {}", BOT_NAME))
                    .await
            }
            Command::Start => self.handle_start(&update.chat).await,
            Command::Help => self.handle_help(&update.chat).await,
            Command::Ask => self.handle_ask(&update.chat, remainder).await,
            Command::Status => self.handle_status(&update.chat).await,
        }
    }

    /// /greet: address the sender by name; silent no-op without an identity.
    async fn handle_greet(&self, update: &Update) -> Result<()> {
        let Some(name) = update.sender.as_ref().and_then(|u| u.display_name()) else {
            debug!("Greet: sender identity unavailable, not handled");
            return Ok(());
        };
        self.bot
            .send_message(&update.chat, &format!("Hello, {}", name))
            .await
    }

    /// /start: prime the model with the system prompt in a spawned task; the
    /// flag flips true only on success and is reset on failure before the
    /// failure is reported.
    async fn handle_start(&self, chat: &Chat) -> Result<()> {
        let bot = self.bot.clone();
        let completion = self.completion.clone();
        let state = self.state.clone();
        let chat = chat.clone();
        tokio::spawn(async move {
            let outcome = completion
                .complete(vec![ChatMessage::system(START_PROMPT)])
                .await;
            let reply = match outcome {
                Ok(_) => {
                    state.set_started(true);
                    info!(chat_id = chat.id, "Conversation started");
                    START_CONFIRMED_MESSAGE
                }
                Err(e) => {
                    state.set_started(false);
                    log_completion_failure(&e);
                    START_FAILED_MESSAGE
                }
            };
            if let Err(e) = bot.send_message(&chat, reply).await {
                error!(error = %e, chat_id = chat.id, "Failed to send start result");
            }
        });
        Ok(())
    }

    /// /help: one message per registered command, annotation in parentheses.
    async fn handle_help(&self, chat: &Chat) -> Result<()> {
        for command in Command::ALL {
            let line = if command.annotation().is_empty() {
                format!("/{}", command.trigger())
            } else {
                format!("/{} ({})", command.trigger(), command.annotation())
            };
            self.bot.send_message(chat, &line).await?;
        }
        Ok(())
    }

    /// /chatGPT: deprecation notice, then exactly the default handler on the
    /// command's remainder.
    async fn handle_ask(&self, chat: &Chat, remainder: String) -> Result<()> {
        self.bot.send_message(chat, DEPRECATED_ALIAS_MESSAGE).await?;
        self.handle_free_text(chat, remainder).await
    }

    /// /status: synchronous flag read.
    async fn handle_status(&self, chat: &Chat) -> Result<()> {
        let text = if self.state.is_started() {
            STATUS_ACTIVE_MESSAGE
        } else {
            STATUS_NOT_ACTIVE_MESSAGE
        };
        self.bot.send_message(chat, text).await
    }

    /// Welcome: one message per joined member, excluding the bot itself.
    async fn handle_new_members(&self, chat: &Chat, members: &[User]) -> Result<()> {
        let own_id = self.bot_identity.read().await.as_ref().map(|u| u.id);
        for member in members {
            if Some(member.id) == own_id {
                debug!(chat_id = chat.id, "Skipping welcome for the bot itself");
                continue;
            }
            let Some(name) = member.display_name() else {
                continue;
            };
            self.bot
                .send_message(chat, &format!("Welcome, {}", name))
                .await?;
        }
        Ok(())
    }

    /// Default handler for text that matches no command.
    ///
    /// With no active conversation the completion client is not called.
    /// Otherwise: acknowledge, then exchange one user-role message in a
    /// spawned task and relay the reply verbatim, or the fixed fallback when
    /// the call fails or yields nothing.
    pub async fn handle_free_text(&self, chat: &Chat, text: String) -> Result<()> {
        if !self.state.is_started() {
            return self.bot.send_message(chat, NOT_STARTED_MESSAGE).await;
        }
        self.bot.send_message(chat, PROCESSING_MESSAGE).await?;

        let bot = self.bot.clone();
        let completion = self.completion.clone();
        let chat = chat.clone();
        tokio::spawn(async move {
            let reply = match completion.complete(vec![ChatMessage::user(text)]).await {
                Ok(answer) => answer,
                Err(e) => {
                    log_completion_failure(&e);
                    EMPTY_ANSWER_MESSAGE.to_string()
                }
            };
            if let Err(e) = bot.send_message(&chat, &reply).await {
                error!(error = %e, chat_id = chat.id, "Failed to send completion reply");
            }
        });
        Ok(())
    }
}

/// Both failure kinds collapse into the same user-visible fallback; only the
/// log distinguishes them.
fn log_completion_failure(error: &CompletionError) {
    match error {
        CompletionError::Api(e) => error!(error = %e, "Completion request failed"),
        CompletionError::Empty => info!("Completion returned no choices"),
    }
}
