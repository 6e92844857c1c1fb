//! Ports (interfaces) for external collaborators.

pub mod text_generator;
