//! persona_llms — service-agnostic text-completion SDK with streaming support.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                  ServiceRegistry                   │
//! │  ┌────────────────────────────────────────────┐    │
//! │  │  HashMap<String, Arc<dyn CompletionService>>│   │
//! │  └────────────────────────────────────────────┘    │
//! │                      │                             │
//! │          ┌───────────┴───────────┐                 │
//! │          ▼                       ▼                 │
//! │   ┌─────────────┐         ┌──────────┐             │
//! │   │ HuggingFace │         │  Ollama  │             │
//! │   │  Service    │         │ Service  │             │
//! │   └─────────────┘         └──────────┘             │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use persona_llms::{CompletionService, HuggingFaceService, ServiceRegistry};
//!
//! let service = HuggingFaceService::from_env().unwrap();
//! let registry = ServiceRegistry::new().register("huggingface", service);
//! ```

pub mod error;
pub mod service;
pub mod services;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export core abstractions
pub use error::{Result, ServiceError};
pub use service::{CompletionService, ServiceRegistry};

// Re-export service implementations
pub use services::HuggingFaceService;
pub use services::OllamaService;

// Re-export commonly used types
pub use types::{CompletionRequest, CompletionStream};
