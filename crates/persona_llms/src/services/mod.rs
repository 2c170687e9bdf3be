pub mod huggingface;
pub mod ollama;

pub use huggingface::HuggingFaceService;
pub use ollama::OllamaService;
