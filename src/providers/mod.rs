//! Completion provider abstraction
//!
//! The chat service only ever talks to a [`CompletionProvider`]. The OpenAI
//! implementation is backed by `rig`; tests substitute their own.

pub mod openai;

pub use openai::OpenAiProvider;

use crate::error::Result;
use crate::models::chat::ChatMessageRole;
use async_trait::async_trait;
use serde::Serialize;

/// A flattened message as forwarded to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

impl ProviderMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A hosted text-completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Runs one completion and returns the raw reply text of the first choice.
    async fn complete(&self, model: &str, messages: &[ProviderMessage]) -> Result<String>;
}
