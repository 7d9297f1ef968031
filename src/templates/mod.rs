// src/templates/mod.rs
// Template Store: logical prompt template names resolved to on-disk text

mod fs;

pub use fs::FsTemplateStore;

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Logical names of the instruction templates the service knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    /// System prompt for `/generate_lesson`
    LessonRubric,
    /// System prompt for `/coach`
    SocraticCoachSystem,
}

impl TemplateName {
    pub const ALL: [TemplateName; 2] = [Self::LessonRubric, Self::SocraticCoachSystem];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessonRubric => "lesson_rubric",
            Self::SocraticCoachSystem => "socratic_coach_system",
        }
    }

    /// Path of the template file relative to the template root
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::LessonRubric => "lesson/lesson_rubric.md",
            Self::SocraticCoachSystem => "coach/socratic_coach_system.md",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lesson_rubric" => Ok(Self::LessonRubric),
            "socratic_coach_system" => Ok(Self::SocraticCoachSystem),
            other => Err(format!("unknown template name: {}", other)),
        }
    }
}

/// Source of template text. Implementations must not cache: every call
/// reflects the current backing content.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn load(&self, name: TemplateName) -> Result<String>;
}
