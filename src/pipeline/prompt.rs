// src/pipeline/prompt.rs
// User-turn layouts interpolated from validated request fields

use std::fmt::Display;

use super::requests::{CoachRequest, LessonRequest};

/// Rendered in place of an optional field the caller left out
pub const ABSENT_MARKER: &str = "not provided";

/// Section labels the coach prompt asks the model to produce. The response is
/// passed through unparsed.
pub const COACH_SECTIONS: [&str; 3] = ["coach_message", "recommended_lesson_stage", "reasoning_summary"];

fn or_absent<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => ABSENT_MARKER.to_string(),
    }
}

/// User turn for `/generate_lesson`
pub fn render_lesson_prompt(req: &LessonRequest) -> String {
    format!(
        "Inputs:\n\
         - stage: {}\n\
         - learner_confidence: {}\n\
         - recent_quiz_score: {}\n\
         - scenario_prompt: {}\n\
         \n\
         Follow the rubric exactly. Return markdown only.\n",
        req.stage, req.confidence, req.last_quiz, req.scenario_prompt
    )
}

/// User turn for `/coach`
pub fn render_coach_prompt(req: &CoachRequest) -> String {
    let mut prompt = format!(
        "Learner context:\n\
         - stage: {}\n\
         - self_confidence: {}\n\
         - last_quiz_score: {}\n\
         - scenario: {}\n\
         \n\
         Return the following sections (plain text, labeled):\n",
        or_absent(&req.stage),
        or_absent(&req.confidence),
        or_absent(&req.last_quiz),
        req.scenario_prompt
    );
    for section in COACH_SECTIONS {
        prompt.push_str("- ");
        prompt.push_str(section);
        prompt.push_str(":\n");
    }
    prompt
}
