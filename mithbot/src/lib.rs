//! # mithbot
//!
//! Telegram front-end for an LLM completion API: a fixed command set routed
//! by a dispatcher, one process-wide conversation flag, and fire-and-forget
//! completion exchanges. Core types/errors/logging live in `core`, the
//! teloxide layer in `telegram`, and the completion boundary in the
//! `completion-client` crate.

pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod runner;
pub mod state;
pub mod telegram;

pub use commands::Command;
pub use components::{build_bot_components, BotComponents};
pub use config::BotConfig;
pub use crate::core::{
    init_tracing, Bot, Chat, MithbotError, Result, ToCoreUpdate, ToCoreUser, Update, UpdateKind,
    User,
};
pub use dispatcher::Dispatcher;
pub use runner::run_bot;
pub use state::{ConversationState, BOT_NAME};
pub use telegram::{run_update_loop, TelegramBotAdapter, TelegramUpdateWrapper, TelegramUserWrapper};
