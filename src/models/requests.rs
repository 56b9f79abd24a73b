use crate::models::chat::{AssistantProfile, AssistantTask, ChatMessage};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<AssistantProfile>,
    /// Free-form notes from the user, appended as additional guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<AssistantTask>>,
    /// Overrides the configured default model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
