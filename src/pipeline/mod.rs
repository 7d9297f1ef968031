// src/pipeline/mod.rs
// Request pipeline: validate -> load template -> interpolate -> complete

mod prompt;
mod requests;

pub use prompt::{ABSENT_MARKER, COACH_SECTIONS, render_coach_prompt, render_lesson_prompt};
pub use requests::{CONFIDENCE_RANGE, CoachRequest, KNOWN_STAGES, LessonRequest, QUIZ_SCORE_RANGE};

use std::sync::Arc;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::llm::{CompletionGateway, OpenAiClient};
use crate::templates::{FsTemplateStore, TemplateName, TemplateStore};

/// Composes a template store and a completion gateway. Both are injected so
/// either can be substituted in tests.
#[derive(Clone)]
pub struct Pipeline {
    templates: Arc<dyn TemplateStore>,
    gateway: Arc<dyn CompletionGateway>,
}

impl Pipeline {
    pub fn new(templates: Arc<dyn TemplateStore>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { templates, gateway }
    }

    /// Filesystem templates and the OpenAI client, both from `config`
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            Arc::new(FsTemplateStore::new(&config.templates_dir)),
            Arc::new(OpenAiClient::from_config(config)),
        )
    }

    /// Lesson markdown for a learner context
    pub async fn generate_lesson(&self, req: &LessonRequest) -> Result<String> {
        req.validate()?;
        let user = render_lesson_prompt(req);
        self.run(TemplateName::LessonRubric, &user).await
    }

    /// Raw labeled coach text; the sections are not parsed here
    pub async fn coach(&self, req: &CoachRequest) -> Result<String> {
        req.validate()?;
        let user = render_coach_prompt(req);
        self.run(TemplateName::SocraticCoachSystem, &user).await
    }

    async fn run(&self, template: TemplateName, user: &str) -> Result<String> {
        let system = self.templates.load(template).await?;
        debug!(template = %template, "Template loaded, requesting completion");
        self.gateway.complete(&system, user, None).await
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{RecordingGateway, StaticTemplates};
    use super::*;
    use crate::error::CoachError;

    fn lesson_request() -> LessonRequest {
        LessonRequest {
            stage: "value_expansion".into(),
            confidence: 3,
            last_quiz: 85,
            scenario_prompt: "Upsell analytics add-on".into(),
        }
    }

    #[tokio::test]
    async fn test_generate_lesson_passes_gateway_output_through() {
        let templates = Arc::new(StaticTemplates::with_text("RUBRIC"));
        let gateway = Arc::new(RecordingGateway::replying("# Lesson\n\nStep 1"));
        let pipeline = Pipeline::new(templates.clone(), gateway.clone());

        let text = pipeline.generate_lesson(&lesson_request()).await.unwrap();
        assert_eq!(text, "# Lesson\n\nStep 1");

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (system, user, model) = &calls[0];
        assert_eq!(system, "RUBRIC");
        assert_eq!(user, &render_lesson_prompt(&lesson_request()));
        assert!(model.is_none());
    }

    #[tokio::test]
    async fn test_template_not_found_skips_gateway() {
        let templates = Arc::new(StaticTemplates::missing());
        let gateway = Arc::new(RecordingGateway::replying("unused"));
        let pipeline = Pipeline::new(templates.clone(), gateway.clone());

        let err = pipeline.generate_lesson(&lesson_request()).await.unwrap_err();
        assert!(matches!(err, CoachError::TemplateNotFound { .. }));
        assert_eq!(templates.load_count(), 1);
        assert_eq!(gateway.call_count(), 0);

        let err = pipeline.coach(&CoachRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, CoachError::TemplateNotFound { .. }));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_range_fails_before_any_io() {
        let templates = Arc::new(StaticTemplates::with_text("RUBRIC"));
        let gateway = Arc::new(RecordingGateway::replying("unused"));
        let pipeline = Pipeline::new(templates.clone(), gateway.clone());

        let mut req = lesson_request();
        req.last_quiz = 250;
        let err = pipeline.generate_lesson(&req).await.unwrap_err();
        assert!(matches!(err, CoachError::SchemaViolation { .. }));
        assert_eq!(templates.load_count(), 0);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_coach_with_absent_fields() {
        let templates = Arc::new(StaticTemplates::with_text("SOCRATIC"));
        let gateway = Arc::new(RecordingGateway::replying(
            "coach_message: What outcome matters most?\nrecommended_lesson_stage: risk\nreasoning_summary: ...",
        ));
        let pipeline = Pipeline::new(templates, gateway.clone());

        let text = pipeline
            .coach(&CoachRequest::new("I have a churn risk call tomorrow"))
            .await
            .unwrap();
        assert!(text.starts_with("coach_message:"));

        let calls = gateway.calls.lock().unwrap();
        let (system, user, _) = &calls[0];
        assert_eq!(system, "SOCRATIC");
        assert!(user.contains("- stage: not provided"));
        assert!(user.contains("- scenario: I have a churn risk call tomorrow"));
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates_as_provider_error() {
        let templates = Arc::new(StaticTemplates::with_text("RUBRIC"));
        let gateway = Arc::new(RecordingGateway::failing("connection reset"));
        let pipeline = Pipeline::new(templates, gateway.clone());

        let err = pipeline.generate_lesson(&lesson_request()).await.unwrap_err();
        assert!(matches!(err, CoachError::CompletionProvider(_)));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_from_config_uses_templates_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ServiceConfig::default().with_templates_dir(dir.path());
        let pipeline = Pipeline::from_config(&config);

        // Empty template dir: fails on the template, never reaching the network
        let err = pipeline.coach(&CoachRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, CoachError::TemplateNotFound { .. }));
    }
}
