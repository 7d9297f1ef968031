// src/web/envelope.rs
// Uniform {ok, ...} response envelope for pipeline endpoints

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::error;

use crate::error::Result;

/// Payload key for `/generate_lesson`
pub const LESSON_KEY: &str = "lesson_markdown";
/// Payload key for `/coach`
pub const COACH_KEY: &str = "coach_response";

/// Either `{"ok": true, <key>: payload}` or `{"ok": false, "error": message}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    Success { key: &'static str, payload: String },
    Failure { error: String },
}

impl ResponseEnvelope {
    pub fn success(key: &'static str, payload: impl Into<String>) -> Self {
        Self::Success {
            key,
            payload: payload.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Convert a pipeline result. Failures are logged in full here and the
    /// caller only sees the short message.
    pub fn from_result(key: &'static str, result: Result<String>) -> Self {
        match result {
            Ok(payload) => Self::success(key, payload),
            Err(e) => {
                error!(endpoint = key, error = %e, detail = ?e, "Pipeline request failed");
                Self::failure(e.short_message())
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success { key, payload } => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry(key, payload)?;
            }
            Self::Failure { error } => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
