//! Groq adapter for the [`TextGenerator`] port.
//!
//! Speaks the OpenAI-compatible chat-completions wire format, so any
//! service exposing `/chat/completions` (Groq, OpenAI, OpenRouter, a local
//! server) works with a different `base_url`. One POST per generation
//! call; the only timeout in the pipeline is the request timeout set here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use tutor_application::ports::text_generator::{GenerationError, SamplingParams, TextGenerator};

/// Generator backed by a Groq-style chat-completions endpoint.
pub struct GroqGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqGenerator {
    /// `base_url` includes the API version prefix
    /// (e.g. `https://api.groq.com/openai/v1`).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

/// Pull the reply text out of a parsed completion response.
fn first_choice_content(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    Ok(content)
}

#[async_trait]
impl TextGenerator for GroqGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: SamplingParams,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        debug!(model = %self.model, max_tokens = params.max_tokens, "calling generation service");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::UpstreamStatus(status.as_u16()));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        first_choice_content(parsed)
    }
}
