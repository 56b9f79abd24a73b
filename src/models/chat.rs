use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Default model used when neither the request nor the configuration names one
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Reply returned when the provider answers with nothing usable.
pub const FALLBACK_REPLY: &str =
    "I'm here, but I wasn't able to generate a response just yet. Try again with more detail.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

/// A single conversation turn as sent by the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Client-side identifier, ignored by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: ChatMessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatMessageRole, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            content: content.into(),
        }
    }
}

/// What the user chose to share about themselves.
///
/// Every field is optional; missing or blank fields never reach the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One of the user's current commitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantTask {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl AssistantTask {
    pub fn new(id: impl Into<String>, title: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
