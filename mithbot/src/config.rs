//! Bot configuration, loaded from the environment.

use std::env;

use crate::core::{MithbotError, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_LOG_FILE: &str = "logs/mithbot.log";

/// Process configuration. Both tokens are required; everything else has a
/// default.
pub struct BotConfig {
    pub bot_token: String,
    pub completion_api_key: String,
    pub completion_base_url: String,
    pub completion_model: String,
    /// Optional Bot API base URL override (tests point this at a mock
    /// server). Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `TG_TOKEN` and `AI_TOKEN` are required; a missing
    /// token fails startup.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TG_TOKEN")
            .map_err(|_| MithbotError::Config("TG_TOKEN not set".to_string()))?;
        let completion_api_key = env::var("AI_TOKEN")
            .map_err(|_| MithbotError::Config("AI_TOKEN not set".to_string()))?;
        let completion_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let completion_model = env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            completion_api_key,
            completion_base_url,
            completion_model,
            telegram_api_url,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "TG_TOKEN",
            "AI_TOKEN",
            "OPENAI_BASE_URL",
            "AI_MODEL",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
        ] {
            env::remove_var(key);
        }
    }

    /// **Test: defaults apply when only the required tokens are set.**
    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        clear_env();
        env::set_var("TG_TOKEN", "tg_token");
        env::set_var("AI_TOKEN", "ai_token");

        let config = BotConfig::from_env().unwrap();

        assert_eq!(config.bot_token, "tg_token");
        assert_eq!(config.completion_api_key, "ai_token");
        assert_eq!(config.completion_base_url, "https://api.openai.com/v1");
        assert_eq!(config.completion_model, "gpt-4o");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, "logs/mithbot.log");
    }

    /// **Test: a missing required token fails fast.**
    #[test]
    #[serial]
    fn test_from_env_missing_tokens() {
        clear_env();
        assert!(BotConfig::from_env().is_err());

        env::set_var("TG_TOKEN", "tg_token");
        assert!(BotConfig::from_env().is_err());

        env::set_var("AI_TOKEN", "ai_token");
        assert!(BotConfig::from_env().is_ok());
    }

    /// **Test: custom values override defaults; TELOXIDE_API_URL is the
    /// fallback name for the Bot API override.**
    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("TG_TOKEN", "tg_token");
        env::set_var("AI_TOKEN", "ai_token");
        env::set_var("OPENAI_BASE_URL", "https://proxy.example/v1");
        env::set_var("AI_MODEL", "gpt-4o-mini");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/mithbot-test.log");

        let config = BotConfig::from_env().unwrap();

        assert_eq!(config.completion_base_url, "https://proxy.example/v1");
        assert_eq!(config.completion_model, "gpt-4o-mini");
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
        assert_eq!(config.log_file, "/tmp/mithbot-test.log");
    }
}
