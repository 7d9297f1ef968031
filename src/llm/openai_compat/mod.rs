// src/llm/openai_compat/mod.rs
// OpenAI-compatible chat-completions wire format

mod request;
mod response;

pub use request::ChatRequest;
pub use response::{ChatResponse, ChatResult, parse_chat_response};
