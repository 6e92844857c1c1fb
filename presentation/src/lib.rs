//! Presentation layer for lingua-tutor
//!
//! The HTTP surface (one tutor endpoint plus a health probe) and the CLI
//! definition consumed by the server binary.

pub mod cli;
pub mod http;

pub use cli::Cli;
pub use http::{AppState, build_router, serve};
