//! Component factory: builds the dispatcher's dependencies from config.
//! Isolates assembly from the runner.

use std::sync::Arc;

use completion_client::{CompletionClient, OpenAICompletionClient};
use tokio::sync::RwLock;
use tracing::error;

use crate::config::BotConfig;
use crate::core::{Bot as CoreBot, User};
use crate::state::ConversationState;
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for `run_bot`, produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub completion: Arc<dyn CompletionClient>,
    pub state: Arc<ConversationState>,
    pub bot_identity: Arc<RwLock<Option<User>>>,
}

/// Builds [`BotComponents`] from config. An invalid `TELEGRAM_API_URL` logs
/// an error and falls back to the default endpoint.
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let completion: Arc<dyn CompletionClient> = Arc::new(
        OpenAICompletionClient::with_base_url(
            config.completion_api_key.clone(),
            config.completion_base_url.clone(),
        )
        .with_model(config.completion_model.clone()),
    );

    BotComponents {
        teloxide_bot,
        bot,
        completion,
        state: Arc::new(ConversationState::new()),
        bot_identity: Arc::new(RwLock::new(None)),
    }
}
