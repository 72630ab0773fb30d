//! Chat relay handler (/chat)

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::models::{ChatReply, ChatRequest, CompletionRequest, Message};
use crate::upstream;
use axum::{Extension, Json};
use reqwest::Client;
use std::sync::Arc;

/// Instruction prepended to every conversation before forwarding upstream.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Prepend the fixed system message to the caller's conversation.
/// The result always has length = inbound length + 1, with the system
/// message at position 0.
pub fn outbound_messages(inbound: Vec<Message>) -> Vec<Message> {
    let mut messages = Vec::with_capacity(inbound.len() + 1);
    messages.push(Message::new("system", SYSTEM_PROMPT));
    messages.extend(inbound);
    messages
}

/// Chat endpoint handler: forward the conversation upstream and return the
/// model's reply.
pub async fn chat_handler(
    Extension(config): Extension<Arc<Config>>,
    Extension(client): Extension<Client>,
    body: axum::body::Bytes,
) -> RelayResult<Json<ChatReply>> {
    let req: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Failed to parse request body: {}", e);
        RelayError::InvalidRequest(format!("Invalid JSON: {}", e))
    })?;

    tracing::debug!("Received chat request with {} message(s)", req.messages.len());

    let completion_req = CompletionRequest {
        model: config.model.clone(),
        messages: outbound_messages(req.messages),
    };

    if config.verbose {
        tracing::trace!(
            "Upstream payload: {}",
            serde_json::to_string_pretty(&completion_req).unwrap_or_default()
        );
    }

    let reply = upstream::send_chat(&config, &client, &completion_req).await?;

    Ok(Json(ChatReply { response: reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_prepends_system_message() {
        let inbound = vec![
            Message::new("user", "hi"),
            Message::new("assistant", "hello"),
            Message::new("user", "how are you?"),
        ];
        let outbound = outbound_messages(inbound.clone());

        assert_eq!(outbound.len(), inbound.len() + 1);
        assert_eq!(outbound[0], Message::new("system", SYSTEM_PROMPT));
        assert_eq!(&outbound[1..], &inbound[..]);
    }

    #[test]
    fn test_outbound_empty_conversation() {
        let outbound = outbound_messages(vec![]);
        assert_eq!(outbound, vec![Message::new("system", SYSTEM_PROMPT)]);
    }

    #[test]
    fn test_outbound_preserves_content_verbatim() {
        let content = "line one\nline two\t\"quoted\"  trailing  ";
        let outbound = outbound_messages(vec![Message::new("user", content)]);
        assert_eq!(outbound[1].content, content);
    }

    #[test]
    fn test_outbound_preserves_caller_system_messages() {
        // A caller-supplied system message stays after the fixed one.
        let outbound = outbound_messages(vec![Message::new("system", "be terse")]);
        assert_eq!(outbound.len(), 2);
        assert_eq!(outbound[0].content, SYSTEM_PROMPT);
        assert_eq!(outbound[1].content, "be terse");
    }
}
