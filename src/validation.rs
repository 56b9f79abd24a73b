//! Input validation for inbound chat payloads.
//!
//! Parsing is schema-driven: the serde models in [`crate::models`] check every
//! field's type and enum membership, and the functions here add the rules
//! serde can't express.

use crate::error::{Error, Result};
use crate::models::requests::ChatRequest;

/// Parses and validates a raw `POST /api/chat` body.
///
/// # Returns
/// * `Ok(ChatRequest)` when the body is valid JSON matching the envelope
/// * `Err(Error::MalformedRequest)` otherwise
///
/// # Examples
/// ```
/// use companion::validation::parse_chat_request;
///
/// assert!(parse_chat_request(br#"{"messages":[{"role":"user","content":"hi"}]}"#).is_ok());
/// assert!(parse_chat_request(b"{}").is_err());
/// ```
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest> {
    let request: ChatRequest = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedRequest(format!("Invalid chat payload: {}", e)))?;

    validate_chat_request(&request)?;

    Ok(request)
}

/// Validates the rules of a chat request that its type cannot encode.
pub fn validate_chat_request(request: &ChatRequest) -> Result<()> {
    if request.messages.is_empty() {
        return Err(Error::MalformedRequest(
            "messages must contain at least one entry".to_string(),
        ));
    }

    Ok(())
}

/// Sanitizes string input by trimming whitespace
pub fn sanitize_string(input: &str) -> String {
    input.trim().to_string()
}

/// Returns the trimmed value, or `None` when it is absent or blank.
pub fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}
