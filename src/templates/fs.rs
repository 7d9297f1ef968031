// src/templates/fs.rs
// Filesystem-backed template store

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{TemplateName, TemplateStore};
use crate::error::{CoachError, Result};

/// Reads templates from a fixed root directory on every call
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical name to its file under the root
    pub fn resolve(&self, name: TemplateName) -> PathBuf {
        self.root.join(name.relative_path())
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn load(&self, name: TemplateName) -> Result<String> {
        let path = self.resolve(name);

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!(template = %name, bytes = text.len(), "Loaded template");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CoachError::TemplateNotFound {
                name: name.to_string(),
                path,
            }),
            Err(e) => Err(CoachError::TemplateReadError {
                name: name.to_string(),
                source: e,
            }),
        }
    }
}
