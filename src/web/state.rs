// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::pipeline::Pipeline;

/// Shared application state. Read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Production wiring: filesystem templates and the OpenAI client
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Pipeline::from_config(config))
    }
}
