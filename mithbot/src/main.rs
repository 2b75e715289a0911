//! Binary for the Telegram completion bot.

use anyhow::Result;
use mithbot::{run_bot, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    run_bot(config).await
}
