//! Hugging Face-specific types

use serde::{Deserialize, Serialize};

/// Configuration for the Hugging Face service
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Access token for authentication
    pub api_key: String,
    /// Base URL (default: https://api-inference.huggingface.co)
    pub base_url: String,
    /// Model repository id
    pub model: String,
}

impl HuggingFaceConfig {
    /// Create new config with access token
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "openai-community/gpt-oss-20b".to_string(),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Set model repository id
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Text-generation request body
#[derive(Debug, Serialize)]
pub struct HfRequest {
    pub inputs: String,
    pub parameters: HfParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Generation parameters
#[derive(Debug, Serialize)]
pub struct HfParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

/// One element of the non-streaming response array
#[derive(Debug, Deserialize)]
pub struct HfGeneration {
    pub generated_text: String,
}

/// Streaming SSE payload
#[derive(Debug, Deserialize)]
pub struct HfStreamChunk {
    pub token: HfToken,
    /// Present only on the final event, carrying the full text.
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// One generated token
#[derive(Debug, Deserialize)]
pub struct HfToken {
    pub text: String,
    #[serde(default)]
    pub special: bool,
}
