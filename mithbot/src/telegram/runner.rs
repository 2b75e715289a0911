//! Update loop: long polling, identity cache, spawn-per-update dispatch.
//!
//! The first listener error is fatal: it is logged and returned so the
//! process exits non-zero for a supervising process manager to restart.

use std::sync::Arc;

use futures::{pin_mut, StreamExt};
use teloxide::prelude::*;
use teloxide::update_listeners::{polling_default, AsUpdateStream};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
use crate::core::{MithbotError, Result, ToCoreUpdate, ToCoreUser, User};
use crate::dispatcher::Dispatcher;

/// Runs the update loop until the transport fails.
///
/// Calls `get_me` first and caches the bot's own identity (welcome
/// self-exclusion, command @-suffix matching). Each message update is
/// converted to a core update and dispatched in a spawned task, so the loop
/// never waits on a handler.
#[instrument(skip(bot, dispatcher, bot_identity))]
pub async fn run_update_loop(
    bot: teloxide::Bot,
    dispatcher: Arc<Dispatcher>,
    bot_identity: Arc<RwLock<Option<User>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let identity = TelegramUserWrapper(&me.user).to_core();
            info!(
                bot_id = identity.id,
                username = ?identity.username,
                "Bot identity cached before update loop"
            );
            *bot_identity.write().await = Some(identity);
        }
        Err(e) => {
            // Without get_me the bot cannot exclude itself from welcomes.
            error!(error = %e, "get_me failed");
            return Err(MithbotError::Transport(e.to_string()));
        }
    }

    let mut listener = polling_default(bot).await;
    let stream = listener.as_stream();
    pin_mut!(stream);

    while let Some(next) = stream.next().await {
        let update = match next {
            Ok(update) => update,
            Err(e) => {
                error!(error = %e, "Update stream failed, shutting down");
                return Err(MithbotError::Transport(e.to_string()));
            }
        };

        let teloxide::types::UpdateKind::Message(message) = update.kind else {
            debug!("Ignoring non-message update");
            continue;
        };

        let core_update = TelegramUpdateWrapper(&message).to_core();
        info!(
            update_id = %core_update.id,
            chat_id = core_update.chat.id,
            "Received update"
        );

        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            if let Err(e) = dispatcher.dispatch(core_update).await {
                error!(error = %e, "Dispatch failed");
            }
        });
    }

    Ok(())
}
