//! Configuration loading and file formats.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileExerciseConfig, FileGeneratorConfig, FileServerConfig};
pub use loader::ConfigLoader;
