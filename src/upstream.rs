//! Upstream chat-completions client
//!
//! One POST per relay exchange; no retries, no caching.

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::models::{CompletionRequest, CompletionResponse};
use reqwest::Client;

/// Send the completion request upstream and extract the reply text from
/// `choices[0].message.content`.
pub async fn send_chat(
    config: &Config,
    client: &Client,
    req: &CompletionRequest,
) -> RelayResult<String> {
    let url = config.chat_completions_url();

    tracing::debug!("Sending completion request to {}", url);

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .json(req)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Upstream error ({}): {}", status, body);
        return Err(RelayError::UpstreamStatus { status, body });
    }

    let text = response.text().await?;

    let completion: CompletionResponse = serde_json::from_str(&text).map_err(|e| {
        tracing::error!("Failed to decode upstream response: {}", e);
        RelayError::UpstreamMalformed(format!("Unexpected response body: {}", e))
    })?;

    let reply = completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| {
            tracing::error!("Upstream response has no choices");
            RelayError::UpstreamMalformed("Response contains no choices".to_string())
        })?;

    Ok(reply)
}
