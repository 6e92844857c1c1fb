//! Domain layer for lingua-tutor
//!
//! This crate contains the core business logic of the exercise pipeline:
//! entities, prompt templates, response extraction, schema validation,
//! fallback content, and the filler-word corrector. It has no dependencies
//! on infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Pipeline
//!
//! A generated action flows Prompt -> Generate -> Extract -> Validate.
//! Everything except the generation call lives here as pure functions;
//! the generation call itself is a port owned by the application layer.
//!
//! ## Fallback
//!
//! Only the grammar action carries a deterministic fallback. Vocabulary
//! and conversation surface their errors to the caller.

pub mod exercise;
pub mod extraction;
pub mod filler;
pub mod prompt;

// Re-export commonly used types
pub use exercise::{
    entities::{ConversationReply, FillerCorrection, GrammarExercise, WordExercise},
    fallback::{fallback_grammar_exercise, generic_grammar_exercise},
    validation::{ValidationError, validate_grammar_exercise, validate_word_exercises},
    value_objects::{Action, ParseActionError, ParseSkillLevelError, SkillLevel},
};
pub use extraction::{ExtractionError, Shape, extract_fragment};
pub use filler::correct_fillers;
pub use prompt::PromptTemplate;
