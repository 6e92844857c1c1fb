//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Defaults mirror the deployed behavior so an empty file (or no file)
//! yields a working service, API key aside.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tutor_application::GenerationDefaults;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub generator: FileGeneratorConfig,
    pub exercises: FileExerciseConfig,
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// Generation service connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Base URL including the API version prefix.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Bearer token; when absent the `GROQ_API_KEY` env var is used.
    pub api_key: Option<String>,
    /// Sampling temperature (near zero for deterministic exercises).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-70b-8192".to_string(),
            api_key: None,
            temperature: 0.001,
            timeout_seconds: 30,
        }
    }
}

/// Exercise generation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExerciseConfig {
    pub vocabulary_count: usize,
    pub conversation_max_tokens: u32,
    pub vocabulary_max_tokens: u32,
    pub grammar_max_tokens: u32,
}

impl Default for FileExerciseConfig {
    fn default() -> Self {
        Self {
            vocabulary_count: 5,
            conversation_max_tokens: 300,
            vocabulary_max_tokens: 3000,
            grammar_max_tokens: 500,
        }
    }
}

impl FileConfig {
    /// Resolve the API key: explicit config value first, then env.
    pub fn api_key(&self) -> Option<String> {
        self.generator
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.generator.timeout_seconds)
    }

    /// Sampling defaults handed to the use cases.
    pub fn generation_defaults(&self) -> GenerationDefaults {
        GenerationDefaults {
            temperature: self.generator.temperature,
            conversation_max_tokens: self.exercises.conversation_max_tokens,
            vocabulary_max_tokens: self.exercises.vocabulary_max_tokens,
            grammar_max_tokens: self.exercises.grammar_max_tokens,
            vocabulary_count: self.exercises.vocabulary_count,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
