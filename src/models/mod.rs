pub mod chat;
pub mod personas;
pub mod requests;

pub use chat::{
    AssistantProfile, AssistantTask, ChatMessage, ChatMessageRole, ChatResponse,
    DEFAULT_CHAT_MODEL, FALLBACK_REPLY,
};
pub use personas::{PersonaPreset, PersonaTone};
pub use requests::ChatRequest;
