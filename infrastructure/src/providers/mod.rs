//! Generation service adapters.

pub mod groq;
