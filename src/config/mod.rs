// src/config/mod.rs
// Process-wide configuration, built once at startup and read-only afterwards

pub mod env;

pub use env::{ConfigValidation, read_key};

use std::path::{Path, PathBuf};

use crate::error::{CoachError, Result};

/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Service configuration passed explicitly into the pipeline and gateway
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Credential for the completion provider (OPENAI_API_KEY)
    pub api_key: Option<String>,
    /// API root, without the trailing `/chat/completions`
    pub base_url: String,
    /// Model used when a pipeline does not name one
    pub model: String,
    /// Root directory holding the prompt templates
    pub templates_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            templates_dir: Self::default_templates_dir(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Template root anchored at the crate directory, so the launch
    /// directory never changes which files are read.
    pub fn default_templates_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("prompts")
    }

    /// Set the API key, treating blank values as absent
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the configuration. Warnings do not block startup.
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if self.api_key.is_none() {
            validation.add_warning(
                "No API key configured. Set OPENAI_API_KEY; completion calls will fail until then.",
            );
        }

        if !self.templates_dir.is_dir() {
            validation.add_warning(format!(
                "Templates directory {} does not exist; template loads will fail per request.",
                self.templates_dir.display()
            ));
        }

        if self.model.trim().is_empty() {
            validation.add_error("Model name must not be empty.");
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            validation.add_error(format!(
                "Base URL '{}' must start with http:// or https://",
                self.base_url
            ));
        }

        validation
    }

    /// Validate and fail on errors, handing back the warnings for logging
    pub fn ensure_valid(&self) -> Result<ConfigValidation> {
        let validation = self.validate();
        if validation.is_valid() {
            Ok(validation)
        } else {
            Err(CoachError::Config(validation.report()))
        }
    }
}
