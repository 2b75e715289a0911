//! OpenAI-backed [`CompletionClient`]: maps roles onto the chat-completions
//! API and returns the first choice's content.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{mask_token, ChatMessage, CompletionClient, CompletionError, MessageRole};

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Chat-completion client over the OpenAI API (or a compatible endpoint via
/// `with_base_url`). The API key is stored only for masked logging.
pub struct OpenAICompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
    api_key_for_logging: String,
}

impl OpenAICompletionClient {
    /// Builds a client against the default API base URL.
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints,
    /// or a local mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Converts one [`ChatMessage`] into the API request message format.
fn to_request_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, CompletionError> {
    let content = msg.content.clone();
    let request_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| CompletionError::Api(e.to_string()))?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| CompletionError::Api(e.to_string()))?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| CompletionError::Api(e.to_string()))?
            .into(),
    };
    Ok(request_msg)
}

#[async_trait]
impl CompletionClient for OpenAICompletionClient {
    #[instrument(skip(self, messages))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError> {
        info!(
            model = %self.model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "Completion request"
        );

        let request_messages = messages
            .iter()
            .map(to_request_message)
            .collect::<Result<Vec<_>, _>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(request_messages)
            .build()
            .map_err(|e| CompletionError::Api(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| CompletionError::Api(e.to_string()))?;

        if let Some(ref usage) = response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::Empty)?;
        match choice.message.content {
            Some(content) => {
                debug!(reply_len = content.len(), "Completion reply");
                Ok(content)
            }
            None => Err(CompletionError::Empty),
        }
    }
}
