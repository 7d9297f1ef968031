// src/llm/openai.rs
// OpenAI chat-completions client (single attempt, non-streaming)

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::{CoachError, Result};
use crate::llm::gateway::{CompletionGateway, DEFAULT_TEMPERATURE};
use crate::llm::openai_compat::{ChatRequest, parse_chat_response};
use crate::llm::Message;

/// OpenAI (or OpenAI-compatible) API client
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_model: default_model.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.api_key.clone(), &config.base_url, &config.model)
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    #[instrument(skip_all, fields(request_id, model))]
    async fn complete(&self, system: &str, user: &str, model: Option<&str>) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoachError::CompletionProvider("missing API key".into()))?;

        let model = model.unwrap_or(self.default_model.as_str());
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());
        Span::current().record("model", model);

        let request = ChatRequest::new(model, vec![Message::system(system), Message::user(user)])
            .with_temperature(DEFAULT_TEMPERATURE);

        debug!(
            request_id = %request_id,
            system_chars = system.len(),
            user_chars = user.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.chat_completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CoachError::CompletionProvider(format!(
                "API error {}: {}",
                status, error_body
            )));
        }

        let body = response.text().await?;
        let result = parse_chat_response(&body)?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        if let Some(ref u) = result.usage {
            debug!(
                request_id = %request_id,
                prompt_tokens = ?u.prompt_tokens,
                completion_tokens = ?u.completion_tokens,
                total_tokens = ?u.total_tokens,
                "Token usage"
            );
        }

        info!(
            request_id = %request_id,
            duration_ms,
            finish_reason = ?result.finish_reason,
            content_chars = result.content.len(),
            "Chat completion finished"
        );

        Ok(result.content)
    }
}
