//! Scripted [`TextGenerator`] fakes for use-case tests.

use crate::ports::text_generator::{GenerationError, SamplingParams, TextGenerator};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns a fixed reply and records the prompts and params it was called with.
pub struct ScriptedGenerator {
    reply: String,
    pub calls: Mutex<Vec<(String, SamplingParams)>>,
}

impl ScriptedGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: SamplingParams,
    ) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), params));
        Ok(self.reply.clone())
    }
}

/// Always fails with the given error constructor.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: SamplingParams,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::RequestFailed("connection refused".into()))
    }
}
