// src/pipeline/requests.rs
// Inbound request bodies for the lesson and coach endpoints

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Learner self-rating scale
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<i64> = 1..=5;
/// Quiz score percentage
pub const QUIZ_SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Customer-lifecycle stages the prompts are written for. `stage` fields stay
/// free-form strings; this list is informational.
pub const KNOWN_STAGES: [&str; 5] = ["onboarding", "adoption", "value_expansion", "risk", "renewal"];

/// Body of `POST /generate_lesson`; every field is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRequest {
    pub stage: String,
    pub confidence: i64,
    pub last_quiz: i64,
    pub scenario_prompt: String,
}

/// Body of `POST /coach`; only the scenario is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachRequest {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub confidence: Option<i64>,
    #[serde(default)]
    pub last_quiz: Option<i64>,
    pub scenario_prompt: String,
}

impl LessonRequest {
    /// Range checks that serde cannot express. Runs before any I/O.
    pub fn validate(&self) -> Result<()> {
        check_range("confidence", self.confidence, &CONFIDENCE_RANGE)?;
        check_range("last_quiz", self.last_quiz, &QUIZ_SCORE_RANGE)
    }
}

impl CoachRequest {
    pub fn new(scenario_prompt: impl Into<String>) -> Self {
        Self {
            stage: None,
            confidence: None,
            last_quiz: None,
            scenario_prompt: scenario_prompt.into(),
        }
    }

    /// Range checks for the optional fields that are present
    pub fn validate(&self) -> Result<()> {
        if let Some(confidence) = self.confidence {
            check_range("confidence", confidence, &CONFIDENCE_RANGE)?;
        }
        if let Some(last_quiz) = self.last_quiz {
            check_range("last_quiz", last_quiz, &QUIZ_SCORE_RANGE)?;
        }
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: i64,
    range: &std::ops::RangeInclusive<i64>,
) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoachError::SchemaViolation {
            field,
            reason: format!(
                "must be between {} and {}, got {}",
                range.start(),
                range.end(),
                value
            ),
        })
    }
}
