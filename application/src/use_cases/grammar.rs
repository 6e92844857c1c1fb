//! Grammar use case.
//!
//! Prompt -> Generate -> Extract (object) -> Validate, with the pipeline's
//! only availability guarantee: any failure is caught here, logged, and
//! replaced by the deterministic fallback exercise for the level. A
//! grammar request never fails once it reaches this use case.

use crate::config::GenerationDefaults;
use crate::ports::text_generator::{GenerationError, TextGenerator};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use tutor_domain::{
    ExtractionError, GrammarExercise, PromptTemplate, Shape, SkillLevel, ValidationError,
    extract_fragment, fallback_grammar_exercise, validate_grammar_exercise,
};

/// Internal pipeline errors; never observed by the caller.
#[derive(Error, Debug)]
enum GrammarPipelineError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Use case for the grammar action.
pub struct GrammarUseCase {
    generator: Arc<dyn TextGenerator>,
    defaults: GenerationDefaults,
}

impl GrammarUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, defaults: GenerationDefaults) -> Self {
        Self {
            generator,
            defaults,
        }
    }

    /// Generate a grammar exercise for the level. Infallible by design:
    /// pipeline failures substitute the fixed fallback exercise.
    pub async fn execute(&self, level: SkillLevel) -> GrammarExercise {
        match self.run_pipeline(level).await {
            Ok(exercise) => exercise,
            Err(error) => {
                warn!(%level, %error, "grammar pipeline failed, using fallback exercise");
                fallback_grammar_exercise(level)
            }
        }
    }

    async fn run_pipeline(&self, level: SkillLevel) -> Result<GrammarExercise, GrammarPipelineError> {
        let prompt = PromptTemplate::grammar(level);
        debug!(%level, "generating grammar exercise");

        let raw = self
            .generator
            .generate(&prompt, self.defaults.grammar_params())
            .await?;

        let payload = extract_fragment(&raw, Shape::Object)?;
        let exercise = validate_grammar_exercise(&payload)?;

        Ok(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailingGenerator, ScriptedGenerator};

    #[tokio::test]
    async fn test_valid_reply_passes_through() {
        let reply = r#"Here is your exercise:
{"question": "She ___ tea.", "options": ["drink", "drinks"], "correctAnswer": "drinks"}"#;
        let use_case = GrammarUseCase::new(
            Arc::new(ScriptedGenerator::new(reply)),
            GenerationDefaults::default(),
        );

        let exercise = use_case.execute(SkillLevel::Intermediate).await;
        assert_eq!(exercise.question, "She ___ tea.");
        assert_eq!(exercise.correct_answer, "drinks");
    }

    #[tokio::test]
    async fn test_generation_failure_uses_fallback() {
        let use_case =
            GrammarUseCase::new(Arc::new(FailingGenerator), GenerationDefaults::default());

        let exercise = use_case.execute(SkillLevel::Beginner).await;
        assert_eq!(exercise, fallback_grammar_exercise(SkillLevel::Beginner));
        assert_eq!(exercise.question, "Complete the sentence: I ___ a student.");
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_fallback() {
        let use_case = GrammarUseCase::new(
            Arc::new(ScriptedGenerator::new("I'd rather chat about the weather.")),
            GenerationDefaults::default(),
        );

        let exercise = use_case.execute(SkillLevel::Advanced).await;
        assert_eq!(exercise, fallback_grammar_exercise(SkillLevel::Advanced));
    }

    #[tokio::test]
    async fn test_invalid_schema_uses_fallback() {
        // Parses as JSON but fails validation (no options).
        let reply = r#"{"question": "Pick one", "correctAnswer": "a"}"#;
        let use_case = GrammarUseCase::new(
            Arc::new(ScriptedGenerator::new(reply)),
            GenerationDefaults::default(),
        );

        let exercise = use_case.execute(SkillLevel::Intermediate).await;
        assert_eq!(exercise, fallback_grammar_exercise(SkillLevel::Intermediate));
    }

    #[tokio::test]
    async fn test_always_returns_complete_exercise() {
        for level in [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
        ] {
            let use_case =
                GrammarUseCase::new(Arc::new(FailingGenerator), GenerationDefaults::default());
            let exercise = use_case.execute(level).await;
            assert!(!exercise.question.is_empty());
            assert!(!exercise.options.is_empty());
            assert!(!exercise.correct_answer.is_empty());
        }
    }
}
