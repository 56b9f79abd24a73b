//! OpenAI provider implementation on top of rig
//!
//! Requests go to the Chat Completions endpoint (`POST {base_url}/chat/completions`).

use crate::error::{Error, Result};
use crate::models::chat::ChatMessageRole;
use crate::providers::{CompletionProvider, ProviderMessage};
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel, Message};
use rig::providers::openai::{Client, CompletionsClient};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Sampling temperature used unless configured otherwise
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// OpenAI provider
pub struct OpenAiProvider {
    client: CompletionsClient,
    temperature: f64,
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("temperature", &self.temperature)
            .field("client", &"<OpenAI Client>")
            .finish()
    }
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: &SecretString, base_url: Option<&str>) -> Result<Self> {
        let client = if let Some(url) = base_url {
            tracing::info!(
                base_url = %url,
                "Creating OpenAI provider with custom base URL"
            );
            Client::builder()
                .api_key(api_key.expose_secret())
                .base_url(url)
                .build()
                .map_err(|e| Error::Internal(format!("Failed to create OpenAI client: {}", e)))?
        } else {
            tracing::info!("Creating OpenAI provider with default base URL");
            Client::new(api_key.expose_secret())
                .map_err(|e| Error::Internal(format!("Failed to create OpenAI client: {}", e)))?
        };

        Ok(Self {
            client: client.completions_api(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// A conversation split into the shape rig's completion request expects.
#[derive(Debug)]
pub(crate) struct SplitConversation {
    pub preamble: Option<String>,
    pub history: Vec<Message>,
    pub prompt: Message,
}

/// Splits provider messages into a preamble, prior history and the final turn.
///
/// System messages become the preamble and the last conversational message is
/// the prompt. With no conversational message at all, the system text itself
/// is sent as the only turn.
pub(crate) fn split_conversation(messages: &[ProviderMessage]) -> SplitConversation {
    let preamble = messages
        .iter()
        .filter(|m| m.role == ChatMessageRole::System)
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut history: Vec<Message> = messages
        .iter()
        .filter_map(|m| match m.role {
            ChatMessageRole::User => Some(Message::user(m.content.clone())),
            ChatMessageRole::Assistant => Some(Message::assistant(m.content.clone())),
            ChatMessageRole::System => None,
        })
        .collect();

    match history.pop() {
        Some(prompt) => SplitConversation {
            preamble: (!preamble.is_empty()).then_some(preamble),
            history,
            prompt,
        },
        None => SplitConversation {
            preamble: None,
            history,
            prompt: Message::user(preamble),
        },
    }
}

fn reply_text<'a>(choice: impl Iterator<Item = &'a AssistantContent>) -> String {
    choice
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, model: &str, messages: &[ProviderMessage]) -> Result<String> {
        let SplitConversation {
            preamble,
            history,
            prompt,
        } = split_conversation(messages);

        tracing::debug!(
            model,
            history_len = history.len(),
            has_preamble = preamble.is_some(),
            "Requesting chat completion"
        );

        let mut request = self
            .client
            .completion_model(model)
            .completion_request(prompt)
            .messages(history)
            .temperature(self.temperature);
        if let Some(preamble) = preamble {
            request = request.preamble(preamble);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(reply_text(response.choice.iter()))
    }
}
