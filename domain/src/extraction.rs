//! Structured-fragment extraction from raw model replies.
//!
//! The generation service returns natural-language text that *contains* a
//! JSON fragment, not a clean payload. These functions locate the first
//! balanced bracketed region of the requested shape and parse it. The
//! upstream text is unreliable by construction, so nothing here assumes
//! well-formedness.
//!
//! Matching runs an explicit depth counter over the bracket pair rather
//! than a greedy regex, and tracks JSON string boundaries so that brackets
//! inside string values do not affect depth.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while extracting a structured fragment.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no parseable {shape} fragment in response: {source}")]
    Syntax {
        shape: Shape,
        #[source]
        source: serde_json::Error,
    },
}

/// The kind of JSON fragment expected in the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl Shape {
    fn open(&self) -> char {
        match self {
            Shape::Array => '[',
            Shape::Object => '{',
        }
    }

    fn close(&self) -> char {
        match self {
            Shape::Array => ']',
            Shape::Object => '}',
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Array => f.write_str("array"),
            Shape::Object => f.write_str("object"),
        }
    }
}

/// Extract and parse the first balanced fragment of `shape` from `text`.
///
/// Falls back to treating the entire text as the candidate when no opening
/// bracket is present (a generation that returned clean data with no prose)
/// or when the located fragment never closes. Idempotent: re-extracting
/// from an already-clean candidate yields the same value.
pub fn extract_fragment(text: &str, shape: Shape) -> Result<Value, ExtractionError> {
    let candidate = locate_candidate(text, shape).unwrap_or_else(|| text.trim());

    serde_json::from_str(candidate).map_err(|source| ExtractionError::Syntax { shape, source })
}

/// Locate the first balanced `shape` span in `text`.
///
/// Returns `None` when no opening bracket exists or the span never closes.
fn locate_candidate(text: &str, shape: Shape) -> Option<&str> {
    let open = shape.open();
    let close = shape.close();

    let start = text.find(open)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..start + offset + ch.len_utf8()]);
            }
        }
    }

    // Opened but never closed — let the caller try the full text.
    None
}
