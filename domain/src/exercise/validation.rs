//! Schema validation for extracted exercise payloads.
//!
//! The extractor only guarantees syntactically valid JSON; these functions
//! enforce the exercise shapes. Word-exercise validation is lenient — bad
//! elements are dropped and the survivors returned — while grammar
//! validation is all-or-nothing.

use crate::exercise::entities::{GrammarExercise, WordExercise};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors produced when a parsed payload fails schema constraints.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected a JSON array of word exercises")]
    NotAnArray,

    #[error("no valid word exercises in response")]
    NoValidWords,

    #[error("grammar exercise missing field: {0}")]
    MissingField(&'static str),

    #[error("grammar exercise has no options")]
    EmptyOptions,
}

/// Validate a word-exercise payload, dropping incomplete elements.
///
/// An element survives only if all three fields are present, strings, and
/// non-blank. Partial success is acceptable; an empty survivor set is a
/// validation failure.
pub fn validate_word_exercises(payload: &Value) -> Result<Vec<WordExercise>, ValidationError> {
    let items = payload.as_array().ok_or(ValidationError::NotAnArray)?;

    let words: Vec<WordExercise> = items
        .iter()
        .filter_map(|item| serde_json::from_value::<WordExercise>(item.clone()).ok())
        .filter(WordExercise::is_complete)
        .collect();

    if words.is_empty() {
        return Err(ValidationError::NoValidWords);
    }

    Ok(words)
}

/// Validate a grammar-exercise payload.
///
/// Requires a non-blank question, at least one non-blank option, and a
/// non-blank correct answer. `correct_answer` being a member of `options`
/// is deliberately NOT enforced (lenient upstream behavior); a violation
/// is logged so operators can spot misbehaving generations.
pub fn validate_grammar_exercise(payload: &Value) -> Result<GrammarExercise, ValidationError> {
    let question = non_blank_str(payload, "question")?;

    let options: Vec<String> = payload
        .get("options")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingField("options"))?
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if options.is_empty() {
        return Err(ValidationError::EmptyOptions);
    }

    let correct_answer = non_blank_str(payload, "correctAnswer")?;

    if !options.iter().any(|o| o == correct_answer) {
        warn!(
            correct_answer,
            "grammar exercise correct answer is not among the options"
        );
    }

    Ok(GrammarExercise {
        question: question.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}

fn non_blank_str<'a>(
    payload: &'a Value,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField(field))
}
