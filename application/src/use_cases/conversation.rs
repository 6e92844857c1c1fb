//! Conversation use case.
//!
//! Generates a tutor reply to the learner's input. No extraction or
//! validation beyond a non-empty check — the reply is free text — and
//! no fallback: errors surface to the caller.

use crate::config::GenerationDefaults;
use crate::ports::text_generator::{GenerationError, TextGenerator};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use tutor_domain::{ConversationReply, PromptTemplate, SkillLevel};

/// Errors that can occur while generating a conversation reply.
#[derive(Error, Debug)]
pub enum ConversationError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("No response from model")]
    EmptyReply,
}

/// Use case for the conversation action.
pub struct ConverseUseCase {
    generator: Arc<dyn TextGenerator>,
    defaults: GenerationDefaults,
}

impl ConverseUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, defaults: GenerationDefaults) -> Self {
        Self {
            generator,
            defaults,
        }
    }

    pub async fn execute(
        &self,
        level: SkillLevel,
        user_input: &str,
    ) -> Result<ConversationReply, ConversationError> {
        let prompt = PromptTemplate::conversation(level, user_input);
        debug!(%level, "generating conversation reply");

        let raw = self
            .generator
            .generate(&prompt, self.defaults.conversation_params())
            .await?;

        let message = raw.trim();
        if message.is_empty() {
            return Err(ConversationError::EmptyReply);
        }

        Ok(ConversationReply {
            message: message.to_string(),
        })
    }
}
