//! Chat request pipeline.
//!
//! [`ChatService::handle`] turns one raw request body into a reply:
//!
//! 1. refuse early when no provider credential is configured
//! 2. parse and validate the body ([`crate::validation`])
//! 3. resolve the persona ([`crate::agents`])
//! 4. build the system prompt ([`prompt`])
//! 5. drop client-supplied system messages and prepend the built prompt
//! 6. call the [`CompletionProvider`] with the resolved model
//! 7. normalize the reply, substituting a fallback for empty output
//!
//! The service keeps no state between requests.

pub mod prompt;


pub use prompt::build_system_prompt;

use crate::agents;
use crate::error::{Error, MISSING_API_KEY_MESSAGE, Result};
use crate::models::chat::{
    ChatMessage, ChatMessageRole, ChatResponse, DEFAULT_CHAT_MODEL, FALLBACK_REPLY,
};
use crate::providers::{CompletionProvider, ProviderMessage};
use crate::state::AppState;
use crate::validation;

pub struct ChatService;

impl ChatService {
    /// Handles one `POST /api/chat` body.
    pub async fn handle(state: &AppState, body: &[u8]) -> Result<ChatResponse> {
        let provider = Self::configured_provider(state)?;

        let request = validation::parse_chat_request(body).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected chat payload");
        })?;

        let persona = agents::get_persona(request.persona_id.as_deref());
        let system_prompt = build_system_prompt(
            persona,
            request.instructions.as_deref(),
            request.profile.as_ref(),
            request.tasks.as_deref().unwrap_or_default(),
        );

        let model = resolve_model(
            request.model.as_deref(),
            state.config.ai.default_model.as_deref(),
        );
        let messages = prepare_messages(system_prompt, request.messages);

        tracing::info!(
            persona = persona.id,
            model = %model,
            turns = messages.len() - 1,
            "Dispatching chat completion"
        );

        let reply = Self::dispatch(state, provider, &model, &messages).await?;

        Ok(ChatResponse {
            reply: finalize_reply(&reply),
        })
    }

    fn configured_provider(state: &AppState) -> Result<&dyn CompletionProvider> {
        match (state.config.ai.api_key(), state.provider.as_deref()) {
            (Some(_), Some(provider)) => Ok(provider),
            _ => {
                tracing::error!("Chat request refused: provider API key is not configured");
                Err(Error::Misconfigured(MISSING_API_KEY_MESSAGE.to_string()))
            }
        }
    }

    async fn dispatch(
        state: &AppState,
        provider: &dyn CompletionProvider,
        model: &str,
        messages: &[ProviderMessage],
    ) -> Result<String> {
        let call = provider.complete(model, messages);

        let outcome = match state.config.ai.request_timeout() {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::Provider(format!(
                    "completion timed out after {}s",
                    limit.as_secs()
                ))),
            },
            None => call.await,
        };

        outcome.map_err(|e| {
            tracing::error!(error = %e, model, "Completion provider call failed");
            match e {
                Error::Provider(msg) => Error::Provider(msg),
                other => Error::Provider(other.to_string()),
            }
        })
    }
}

/// Picks the request's model, then the configured default, then the built-in one.
pub fn resolve_model(requested: Option<&str>, configured: Option<&str>) -> String {
    validation::non_blank(requested)
        .or_else(|| validation::non_blank(configured))
        .unwrap_or(DEFAULT_CHAT_MODEL)
        .to_string()
}

/// Drops client system messages and puts the built prompt first.
pub fn prepare_messages(system_prompt: String, history: Vec<ChatMessage>) -> Vec<ProviderMessage> {
    std::iter::once(ProviderMessage::system(system_prompt))
        .chain(
            history
                .into_iter()
                .filter(|message| message.role != ChatMessageRole::System)
                .map(|message| ProviderMessage {
                    role: message.role,
                    content: message.content,
                }),
        )
        .collect()
}

/// Trims the reply, never returning an empty string.
pub fn finalize_reply(reply: &str) -> String {
    let reply = reply.trim();
    if reply.is_empty() {
        tracing::warn!("Provider returned an empty reply, using fallback");
        FALLBACK_REPLY.to_string()
    } else {
        reply.to_string()
    }
}
