//! Text generation port
//!
//! Defines the interface for the external generative text service.
//! The adapter (Groq chat completions) lives in the infrastructure layer;
//! tests inject scripted fakes.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

/// Fixed sampling parameters for one generation call.
///
/// Temperature stays near zero for all actions; only the output budget
/// varies (a conversational reply is short, a vocabulary batch is not).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingParams {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Capability for a single prompt-to-text generation call.
///
/// One outbound network call per invocation, awaited to completion.
/// No retry; retry/backoff is explicitly out of scope.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: SamplingParams,
    ) -> Result<String, GenerationError>;
}
