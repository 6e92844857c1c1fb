//! Generation defaults shared by the use cases.

use crate::ports::text_generator::SamplingParams;

/// Per-action sampling defaults and the vocabulary batch size.
///
/// Loaded from configuration by the composition root; defaults mirror the
/// deployed behavior (near-zero temperature, short conversational replies,
/// a large budget for vocabulary batches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationDefaults {
    pub temperature: f32,
    pub conversation_max_tokens: u32,
    pub vocabulary_max_tokens: u32,
    pub grammar_max_tokens: u32,
    pub vocabulary_count: usize,
}

impl GenerationDefaults {
    pub fn conversation_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.conversation_max_tokens)
    }

    pub fn vocabulary_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.vocabulary_max_tokens)
    }

    pub fn grammar_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.grammar_max_tokens)
    }
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.001,
            conversation_max_tokens: 300,
            vocabulary_max_tokens: 3000,
            grammar_max_tokens: 500,
            vocabulary_count: 5,
        }
    }
}
