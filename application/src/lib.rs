//! Application layer for lingua-tutor
//!
//! Use cases for each generated action plus the ports they depend on.
//! The only port is the [`TextGenerator`] capability: the generation call
//! is injected so every pipeline is testable against a scripted fake.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::GenerationDefaults;
pub use ports::text_generator::{GenerationError, SamplingParams, TextGenerator};
pub use use_cases::conversation::{ConversationError, ConverseUseCase};
pub use use_cases::grammar::GrammarUseCase;
pub use use_cases::vocabulary::{VocabularyError, VocabularyUseCase};
