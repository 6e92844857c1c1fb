//! Prompt construction for the exercise pipeline.

pub mod template;

pub use template::PromptTemplate;
