//! Ollama service module
//!
//! Implements the CompletionService trait for a self-hosted Ollama
//! instance. No API key; the daemon listens on localhost by default.
//! API docs: https://github.com/ollama/ollama/blob/main/docs/api.md

mod provider;
mod types;

pub use provider::OllamaService;
pub use types::OllamaConfig;
