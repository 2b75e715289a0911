//! Main entry: init logging, build components, run the update loop.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::dispatcher::Dispatcher;
use crate::telegram::run_update_loop;

/// Runs the bot until the transport fails; the returned error is the fatal
/// one, already logged.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    if let Some(parent) = Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    init_tracing(&config.log_file)?;

    info!(
        model = %config.completion_model,
        base_url = %config.completion_base_url,
        "Initializing bot"
    );

    let components = build_bot_components(&config);
    let dispatcher = Arc::new(Dispatcher::new(
        components.bot.clone(),
        components.completion.clone(),
        components.state.clone(),
        components.bot_identity.clone(),
    ));

    info!("Bot started successfully");

    if let Err(e) = run_update_loop(
        components.teloxide_bot,
        dispatcher,
        components.bot_identity,
    )
    .await
    {
        error!(error = %e, "Bot terminated on transport failure");
        return Err(e.into());
    }

    Ok(())
}
