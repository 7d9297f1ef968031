// src/llm/gateway.rs
// Completion Gateway abstraction: one system+user exchange with a chat model

use async_trait::async_trait;

use crate::error::Result;

/// Sampling temperature for every completion call
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Issues a single chat completion and returns the top choice's text.
///
/// Exactly two messages are sent, `[system, user]`. A `None` model falls back
/// to the gateway's configured default. There is no retry: one failed attempt
/// fails the call with [`CoachError::CompletionProvider`](crate::error::CoachError).
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, system: &str, user: &str, model: Option<&str>) -> Result<String>;
}
