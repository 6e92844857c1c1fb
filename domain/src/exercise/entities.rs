//! Exercise entities produced by the pipeline.
//!
//! All entities serialize with camelCase field names — the wire format the
//! tutor front-end consumes. They are created per request and discarded
//! after the response is serialized; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// A single vocabulary item with its definition and an example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordExercise {
    pub word: String,
    pub definition: String,
    pub example_sentence: String,
}

impl WordExercise {
    /// All three fields are required and must be non-blank.
    pub fn is_complete(&self) -> bool {
        !self.word.trim().is_empty()
            && !self.definition.trim().is_empty()
            && !self.example_sentence.trim().is_empty()
    }
}

/// A multiple-choice grammar question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarExercise {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Result of running the filler-word corrector over a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillerCorrection {
    pub filler_count: usize,
    pub fillers_used: Vec<String>,
    pub corrected_text: String,
}

/// Free-text tutor reply for the conversation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationReply {
    pub message: String,
}
