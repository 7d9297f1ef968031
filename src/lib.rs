// src/lib.rs
// CSM microlearning service: prompt-template pipelines over a chat-completion API

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod templates;
pub mod web;

pub use error::{CoachError, Result};
