// src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::error::{CoachError, Result};
use crate::llm::Usage;
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ResponseChoice>,
    /// Kept raw; decoded best-effort so bookkeeping never fails a completion
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Top choice text plus bookkeeping
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}

/// Parse an OpenAI-compatible chat response, keeping only the first choice
pub fn parse_chat_response(response_body: &str) -> Result<ChatResult> {
    let data: ChatResponse = serde_json::from_str(response_body).map_err(|e| {
        CoachError::CompletionProvider(format!("Failed to parse chat response: {}", e))
    })?;

    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CoachError::CompletionProvider("No choices in chat response".into()))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| CoachError::CompletionProvider("No content in chat response".into()))?;

    Ok(ChatResult {
        content,
        finish_reason: choice.finish_reason,
        usage: data.usage.and_then(|u| serde_json::from_value::<Usage>(u).ok()),
    })
}
