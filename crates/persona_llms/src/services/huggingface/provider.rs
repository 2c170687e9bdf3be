//! Hugging Face service implementation

use async_trait::async_trait;
use reqwest::Client;
use reqwest_eventsource::EventSource;

use super::stream::create_stream;
use super::types::{HfGeneration, HfParameters, HfRequest, HuggingFaceConfig};
use crate::error::{Result, ServiceError};
use crate::service::CompletionService;
use crate::types::{CompletionRequest, CompletionStream};

/// Hosted inference via the Hugging Face Inference API
pub struct HuggingFaceService {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceService {
    /// Environment variable for the access token
    pub const API_KEY_ENV: &'static str = "HF_TOKEN";

    /// Create a new Hugging Face service
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ServiceError::MissingApiKey("huggingface".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create service from environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| ServiceError::MissingApiKey("huggingface".to_string()))?;

        Self::new(HuggingFaceConfig::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.config.base_url, self.config.model)
    }

    fn to_hf_request(request: &CompletionRequest, stream: bool) -> HfRequest {
        HfRequest {
            inputs: request.prompt.clone(),
            parameters: HfParameters {
                max_new_tokens: request.max_output_tokens,
                temperature: request.temperature,
                return_full_text: false,
            },
            stream: if stream { Some(true) } else { None },
        }
    }
}

#[async_trait]
impl CompletionService for HuggingFaceService {
    fn service_id(&self) -> &str {
        "huggingface"
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        // The inference API has no listing endpoint; return known-good
        // text-generation models, with the configured one first.
        let mut models = vec![self.config.model.clone()];
        for known in [
            "openai-community/gpt-oss-20b",
            "mistralai/Mistral-7B-Instruct-v0.3",
            "HuggingFaceH4/zephyr-7b-beta",
            "google/gemma-2-9b-it",
        ] {
            if known != self.config.model {
                models.push(known.to_string());
            }
        }
        Ok(models)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = self.endpoint();
        let hf_request = Self::to_hf_request(&request, false);
        tracing::debug!(model = %self.config.model, "huggingface completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&hf_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_status(status, body));
        }

        let generations: Vec<HfGeneration> = response.json().await?;
        Ok(generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .unwrap_or_default())
    }

    async fn complete_streaming(&self, request: CompletionRequest) -> Result<CompletionStream> {
        let url = self.endpoint();
        let hf_request = Self::to_hf_request(&request, true);
        tracing::debug!(model = %self.config.model, "huggingface streaming request");

        let req_builder = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&hf_request);

        let event_source = EventSource::new(req_builder)
            .map_err(|e| ServiceError::stream_error(format!("failed to open event source: {e}")))?;

        Ok(create_stream(event_source))
    }
}
