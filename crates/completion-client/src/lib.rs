//! # Completion client abstraction
//!
//! Defines the [`CompletionClient`] trait, the outbound chat message model,
//! and an OpenAI implementation. Transport-agnostic; the bot's dispatcher
//! only sees the trait.
//!
//! One request per call, no retries, no timeouts beyond the HTTP client's
//! defaults. A failed request and an empty response are distinct
//! [`CompletionError`] variants so callers can log them apart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

mod openai;

pub use openai::{OpenAICompletionClient, DEFAULT_MODEL};

/// Role of a chat message, one-to-one with the completion API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single outbound chat message. Constructed per request and not retained
/// after the call returns.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Completion failure. `Api` covers transport and decode errors; `Empty`
/// covers a well-formed response without a usable choice.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Api(String),

    #[error("Completion response contained no choices")]
    Empty,
}

/// Completion client interface: one request from a list of role-tagged
/// messages, returning the first choice's text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError>;
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars,
/// or "***" when the key is too short to mask partially.
pub fn mask_token(token: &str) -> String {
    if token.len() <= 11 {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[token.len() - 4..])
}
