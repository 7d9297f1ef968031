// src/llm/mod.rs
// Completion Gateway: chat-completion client and wire types

mod gateway;
mod openai;
pub mod openai_compat;
mod types;

pub use gateway::{CompletionGateway, DEFAULT_TEMPERATURE};
pub use openai::OpenAiClient;
pub use types::{Message, Usage};
