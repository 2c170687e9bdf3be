//! Hugging Face service module
//!
//! Implements the CompletionService trait for the Hugging Face Inference
//! API text-generation endpoint.
//! API docs: https://huggingface.co/docs/api-inference/tasks/text-generation

mod provider;
mod stream;
mod types;

pub use provider::HuggingFaceService;
pub use types::{HfGeneration, HfRequest, HuggingFaceConfig};
