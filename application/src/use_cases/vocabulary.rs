//! Vocabulary use case.
//!
//! Prompt -> Generate -> Extract (array) -> Validate. Incomplete items are
//! dropped by validation; an empty survivor set is an error. Unlike the
//! grammar action there is no fallback here — failures surface.

use crate::config::GenerationDefaults;
use crate::ports::text_generator::{GenerationError, TextGenerator};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use tutor_domain::{
    ExtractionError, PromptTemplate, Shape, SkillLevel, ValidationError, WordExercise,
    extract_fragment, validate_word_exercises,
};

/// Errors that can occur while generating word exercises.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Use case for the vocabulary action.
pub struct VocabularyUseCase {
    generator: Arc<dyn TextGenerator>,
    defaults: GenerationDefaults,
}

impl VocabularyUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, defaults: GenerationDefaults) -> Self {
        Self {
            generator,
            defaults,
        }
    }

    /// Generate word exercises for the level. `count` overrides the
    /// configured batch size when given.
    pub async fn execute(
        &self,
        level: SkillLevel,
        count: Option<usize>,
    ) -> Result<Vec<WordExercise>, VocabularyError> {
        let count = count.unwrap_or(self.defaults.vocabulary_count);
        let prompt = PromptTemplate::vocabulary(level, count);
        debug!(%level, count, "generating word exercises");

        let raw = self
            .generator
            .generate(&prompt, self.defaults.vocabulary_params())
            .await?;

        let payload = extract_fragment(&raw, Shape::Array)?;
        let words = validate_word_exercises(&payload)?;

        Ok(words)
    }
}
