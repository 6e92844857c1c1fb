//! Infrastructure layer for lingua-tutor
//!
//! Adapters for external collaborators: the Groq chat-completions
//! generation service and TOML configuration loading.

pub mod config;
pub mod providers;

pub use config::{ConfigLoader, FileConfig};
pub use providers::groq::GroqGenerator;
